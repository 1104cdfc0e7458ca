//! State transitions.
//!
//! ## Engine
//!
//! `Engine` owns the dictionary and nothing else. Every transition takes the
//! current `GameState` by reference and returns either a new state or a
//! `GameError`; the input is never modified, so a refused action leaves the
//! caller holding exactly what it had.
//!
//! Validation runs to completion on the untouched input before the clone is
//! mutated. The clone is cheap: boards, racks, bag and history are all
//! persistent `im` structures.
//!
//! ## Concurrency
//!
//! The engine is synchronous and holds no locks. Callers must serialize
//! actions against the same session; different sessions are independent.

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument, warn};

use super::dictionary::Dictionary;
use super::endgame;
use super::score::score_move;
use super::validator::{check_connected, check_placement};
use super::words::find_words;
use crate::board::{PlacementConflict, Position};
use crate::core::action::{Action, Move, Placement};
use crate::core::error::{GameError, InvalidAction, Rejection};
use crate::core::player::{Player, PlayerId, PlayerProfile};
use crate::core::state::{GameState, GameStatus};
use crate::core::tile::{Tile, TileId};

/// Rules engine bound to a word-validity oracle.
///
/// ## Usage
///
/// ```
/// use rust_wordgrid::core::{Action, GameConfig, GameId, GameState, GameStatus, PlayerProfile};
/// use rust_wordgrid::rules::Engine;
///
/// let engine = Engine::new(|_: &str| true);
/// let state = GameState::new(
///     GameId::new("ABCD"),
///     PlayerProfile::new("host", "Host"),
///     GameConfig::default(),
///     42,
/// );
///
/// let guest = PlayerProfile::new("guest", "Guest");
/// let state = engine
///     .apply(&state, &guest.id.clone(), &Action::Join { profile: guest })
///     .unwrap();
///
/// assert_eq!(state.status(), GameStatus::Playing);
/// assert!(state.players().iter().all(|p| p.rack.len() == 7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine<D> {
    dictionary: D,
}

impl<D: Dictionary> Engine<D> {
    #[must_use]
    pub fn new(dictionary: D) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Dispatch a client action attributed to `actor`.
    #[instrument(skip_all, fields(game = %state.id(), actor = %actor, action = action.kind()))]
    pub fn apply(&self, state: &GameState, actor: &PlayerId, action: &Action) -> Result<GameState, GameError> {
        let result = match action {
            Action::Join { profile } => {
                if &profile.id != actor {
                    return Err(InvalidAction::ActorMismatch {
                        actor: actor.clone(),
                        profile: profile.id.clone(),
                    }
                    .into());
                }
                self.join(state, profile.clone())
            }
            Action::PlayMove { placements } => self.play_move(state, actor, placements),
            Action::PassTurn => self.pass_turn(state, actor),
            Action::ExchangeTiles { tiles } => self.exchange_tiles(state, actor, tiles),
        };

        match &result {
            Ok(next) => debug!(turn = next.turn_number(), status = ?next.status(), "action applied"),
            Err(err) => debug!(%err, rejection = err.is_rejection(), "action refused"),
        }
        result
    }

    /// Seat a player. Starts the game once `min_players` are seated.
    #[instrument(skip_all, fields(game = %state.id(), player = %profile.id))]
    pub fn join(&self, state: &GameState, profile: PlayerProfile) -> Result<GameState, GameError> {
        expect_status(state, GameStatus::WaitingForPlayers)?;
        if state.player(&profile.id).is_some() {
            return Err(Rejection::AlreadyJoined { player: profile.id }.into());
        }

        let mut next = state.clone();
        next.players.push_back(Player::new(profile));
        debug!(seated = next.players.len(), "player joined");

        if next.players.len() >= next.config.min_players {
            start(&mut next);
        }
        Ok(next)
    }

    /// Place tiles from the current player's rack.
    ///
    /// Pipeline: resolve placements against the rack, build the candidate
    /// board, check line and connectivity, find words, consult the
    /// dictionary, score. Only then is anything committed.
    #[instrument(skip_all, fields(game = %state.id(), actor = %actor, tiles = placements.len()))]
    pub fn play_move(
        &self,
        state: &GameState,
        actor: &PlayerId,
        placements: &[Placement],
    ) -> Result<GameState, GameError> {
        let seat = seat_on_turn(state, actor)?;
        if placements.is_empty() {
            return Err(Rejection::NoTilesPlaced.into());
        }

        let placed = resolve(&state.players[seat], placements)?;
        let positions: Vec<Position> = placed.iter().map(|(pos, _)| *pos).collect();

        let candidate = state
            .board
            .with_placements(placed.iter().map(|(pos, tile)| (*pos, tile)))
            .map_err(|conflict| match conflict {
                PlacementConflict::Occupied(pos) => GameError::from(Rejection::Occupied(pos)),
                PlacementConflict::OffBoard(pos) => GameError::from(InvalidAction::OffBoard(pos)),
            })?;

        check_placement(&state.board, &positions)?;
        check_connected(&state.board, &positions)?;

        let words = find_words(&candidate, &positions);
        if words.is_empty() {
            return Err(Rejection::NoWordFormed.into());
        }
        for word in &words {
            let text = word.text();
            if !self.dictionary.is_word_valid(&text) {
                return Err(Rejection::UnknownWord(text).into());
            }
        }

        let score = score_move(
            &words,
            &positions,
            state.config.rack_size,
            state.config.bingo_bonus,
        );
        debug!(
            score,
            words = ?words.iter().map(|w| w.text()).collect::<Vec<_>>(),
            "move accepted"
        );

        // Commit.
        let mut next = state.clone();
        next.board = candidate;
        next.board.lock(&positions);

        let ids: Vec<TileId> = placements.iter().map(|p| p.tile).collect();
        let drawn = next.bag.draw(ids.len(), &mut next.rng);
        let mover = &mut next.players[seat];
        mover.score += score;
        mover.remove_from_rack(&ids);
        mover.rack.extend(drawn);

        next.moves.push_back(Move {
            player: actor.clone(),
            tiles: placed,
            score,
            turn: next.turn_number,
        });
        next.last_placed = positions;
        next.consecutive_passes = 0;
        next.advance_turn();

        endgame::settle(&mut next, seat);
        Ok(next)
    }

    /// Give up the turn.
    #[instrument(skip_all, fields(game = %state.id(), actor = %actor))]
    pub fn pass_turn(&self, state: &GameState, actor: &PlayerId) -> Result<GameState, GameError> {
        let seat = seat_on_turn(state, actor)?;

        let mut next = state.clone();
        record_pass(&mut next);
        debug!(passes = next.consecutive_passes, "turn passed");

        endgame::settle(&mut next, seat);
        Ok(next)
    }

    /// Swap rack tiles for tiles from the bag.
    ///
    /// Replacements are drawn before the old tiles go back, so a player never
    /// gets their own discards. If the bag holds fewer tiles than requested
    /// the exchange becomes a pass.
    #[instrument(skip_all, fields(game = %state.id(), actor = %actor, tiles = tiles.len()))]
    pub fn exchange_tiles(
        &self,
        state: &GameState,
        actor: &PlayerId,
        tiles: &[TileId],
    ) -> Result<GameState, GameError> {
        let seat = seat_on_turn(state, actor)?;
        if tiles.is_empty() {
            return Err(Rejection::NothingToExchange.into());
        }

        let player = &state.players[seat];
        let mut seen = FxHashSet::default();
        for &id in tiles {
            if !seen.insert(id) {
                return Err(InvalidAction::DuplicateTile(id).into());
            }
            if player.rack_tile(id).is_none() {
                return Err(InvalidAction::TileNotInRack {
                    player: actor.clone(),
                    tile: id,
                }
                .into());
            }
        }

        let mut next = state.clone();
        if next.bag.len() < tiles.len() {
            warn!(
                requested = tiles.len(),
                remaining = next.bag.len(),
                "bag too short, exchange counts as a pass"
            );
            record_pass(&mut next);
        } else {
            let drawn = next.bag.draw(tiles.len(), &mut next.rng);
            let mover = &mut next.players[seat];
            let returned: Vec<Tile> = mover
                .rack
                .iter()
                .filter(|t| tiles.contains(&t.id))
                .cloned()
                .collect();
            mover.remove_from_rack(tiles);
            mover.rack.extend(drawn);
            next.bag.return_tiles(returned, &mut next.rng);

            next.consecutive_passes = 0;
            next.last_placed.clear();
            next.advance_turn();
            debug!("tiles exchanged");
        }

        endgame::settle(&mut next, seat);
        Ok(next)
    }
}

fn expect_status(state: &GameState, expected: GameStatus) -> Result<(), Rejection> {
    if state.status == expected {
        Ok(())
    } else {
        Err(Rejection::WrongStatus {
            expected,
            actual: state.status,
        })
    }
}

/// Seat index of `actor`, who must be the current player of a running game.
fn seat_on_turn(state: &GameState, actor: &PlayerId) -> Result<usize, GameError> {
    expect_status(state, GameStatus::Playing)?;
    let seat = state
        .player_index(actor)
        .ok_or_else(|| InvalidAction::UnknownPlayer {
            player: actor.clone(),
        })?;
    if seat != state.current_player_index {
        return Err(Rejection::OutOfTurn {
            player: actor.clone(),
        }
        .into());
    }
    Ok(seat)
}

/// Look every placement up on the rack and apply joker letters.
fn resolve(player: &Player, placements: &[Placement]) -> Result<Vec<(Position, Tile)>, InvalidAction> {
    let mut tiles_seen = FxHashSet::default();
    let mut squares_seen = FxHashSet::default();

    placements
        .iter()
        .map(|placement| {
            if !tiles_seen.insert(placement.tile) {
                return Err(InvalidAction::DuplicateTile(placement.tile));
            }
            if !squares_seen.insert(placement.position) {
                return Err(InvalidAction::DuplicatePosition(placement.position));
            }
            if !placement.position.is_on_board() {
                return Err(InvalidAction::OffBoard(placement.position));
            }

            let tile = player
                .rack_tile(placement.tile)
                .ok_or_else(|| InvalidAction::TileNotInRack {
                    player: player.id.clone(),
                    tile: placement.tile,
                })?;

            let tile = match (tile.joker, placement.assigned) {
                (true, Some(letter)) if letter.is_ascii_alphabetic() => tile.clone().with_assigned(letter),
                (true, _) => return Err(InvalidAction::UnassignedJoker(placement.tile)),
                (false, Some(_)) => return Err(InvalidAction::AssignedNonJoker(placement.tile)),
                (false, None) => tile.clone(),
            };
            Ok((placement.position, tile))
        })
        .collect()
}

/// WAITING_FOR_PLAYERS -> PLAYING: fix seat order and deal.
fn start(state: &mut GameState) {
    let mut order: Vec<Player> = state.players.iter().cloned().collect();
    state.rng.shuffle(&mut order);

    for player in &mut order {
        let drawn = state.bag.draw(state.config.rack_size, &mut state.rng);
        player.rack.extend(drawn);
    }

    state.players = order.into_iter().collect();
    state.status = GameStatus::Playing;
    state.current_player_index = 0;
    state.turn_number = 1;
    state.mark_active();

    info!(
        order = ?state.players.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        bag = state.bag.len(),
        "game started"
    );
}

fn record_pass(state: &mut GameState) {
    state.consecutive_passes += 1;
    state.last_placed.clear();
    state.advance_turn();
}
