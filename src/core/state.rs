//! Authoritative game state.
//!
//! ## GameState
//!
//! Complete state of one session, private information included:
//! - Board, bag and every rack
//! - Turn order, turn number, pass counter
//! - Move history
//! - Configuration and RNG position
//!
//! `GameState` is a value. Transitions (see `rules::Engine`) take `&GameState`
//! and return a new one; `im` persistent structures keep those clones O(1).
//! It must never be sent to a client as-is: project it with `view::redact`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::config::GameConfig;
use super::error::SnapshotError;
use super::player::{Player, PlayerId, PlayerProfile};
use super::rng::GameRng;
use crate::bag::TileBag;
use crate::board::{Board, Position};

/// Session code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Four random uppercase letters.
    ///
    /// Uniqueness across live sessions is the host's concern.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let code = (0..4)
            .map(|_| char::from(b'A' + rng.gen_index(26) as u8))
            .collect();
        Self(code)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle stage. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    WaitingForPlayers,
    Playing,
    Finished,
}

/// Which end-of-game trigger fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndReason {
    /// A player emptied their rack with the bag already empty.
    RackAndBagEmpty,
    /// Consecutive passes outnumbered the players.
    ConsecutivePasses,
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the top score, but not all of them.
    Winners(Vec<PlayerId>),
    /// Every player has the same score.
    Draw,
}

impl GameResult {
    /// Check if a player won (alone or tied for first).
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Winners(ps) => ps.contains(player),
            GameResult::Draw => false,
        }
    }
}

/// Full state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) id: GameId,
    pub(crate) host: PlayerId,
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) players: Vector<Player>,
    pub(crate) bag: TileBag,
    pub(crate) moves: Vector<Move>,
    pub(crate) status: GameStatus,
    /// 0 while waiting, 1 for the opening turn.
    pub(crate) turn_number: u32,
    pub(crate) current_player_index: usize,
    /// Squares filled by the most recent move; empty after a pass or exchange.
    pub(crate) last_placed: Vec<Position>,
    pub(crate) consecutive_passes: u32,
    pub(crate) end_reason: Option<EndReason>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a game waiting for players, seated with its host.
    ///
    /// The board is empty and the bag full and shuffled from `seed`.
    #[must_use]
    pub fn new(id: GameId, host: PlayerProfile, config: GameConfig, seed: u64) -> Self {
        config.validate();

        let mut rng = GameRng::new(seed);
        let bag = TileBag::filled(&config.distribution, &mut rng);
        let host_id = host.id.clone();

        Self {
            id,
            host: host_id,
            config,
            board: Board::new(),
            players: Vector::unit(Player::new(host)),
            bag,
            moves: Vector::new(),
            status: GameStatus::WaitingForPlayers,
            turn_number: 0,
            current_player_index: 0,
            last_placed: Vec::new(),
            consecutive_passes: 0,
            end_reason: None,
            rng,
        }
    }

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn host(&self) -> &PlayerId {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// Seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    #[must_use]
    pub fn last_placed(&self) -> &[Position] {
        &self.last_placed
    }

    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Tiles in the bag, on every rack and locked on the board.
    ///
    /// Equals `config().distribution.total()` for the whole life of a game.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.bag.len()
            + self.players.iter().map(|p| p.rack.len()).sum::<usize>()
            + self.board.locked_count()
    }

    /// Outcome of a finished game, `None` while it is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_finished() {
            return None;
        }

        let best = self.players.iter().map(|p| p.score).max()?;
        let top: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|p| p.score == best)
            .map(|p| p.id.clone())
            .collect();

        Some(match top.len() {
            1 => GameResult::Winner(top[0].clone()),
            n if n == self.players.len() => GameResult::Draw,
            _ => GameResult::Winners(top),
        })
    }

    // === Turn Advancement ===

    /// Hand the turn to the next seat and bump the turn number.
    pub(crate) fn advance_turn(&mut self) {
        let len = self.players.len();
        self.current_player_index = (self.current_player_index + 1) % len;
        self.turn_number += 1;
        self.mark_active();
    }

    /// Sync each player's `active` flag with the turn marker.
    pub(crate) fn mark_active(&mut self) {
        let current = self.current_player_index;
        let playing = self.status == GameStatus::Playing;
        for (i, player) in self.players.iter_mut().enumerate() {
            player.active = playing && i == current;
        }
    }

    // === Snapshots ===

    /// Encode the full state for the host's persistence layer.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
