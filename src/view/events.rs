//! Server-to-client events.
//!
//! Tagged the same way as `Action`: `{"type": "GAME_STATE_UPDATE",
//! "payload": {...}}`. Every state update is built through `redact`.

use serde::{Deserialize, Serialize};

use super::redact::{redact, PublicState};
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::tile::Tile;

/// A message from the host to one client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerEvent {
    /// Fresh view of the game, with the recipient's private rack.
    GameStateUpdate {
        game_state: PublicState,
        player_rack: Vec<Tile>,
    },
    /// An action from the recipient was refused.
    Error { message: String },
}

impl ServerEvent {
    /// Update addressed to `viewer`.
    #[must_use]
    pub fn state_update(state: &GameState, viewer: &PlayerId) -> Self {
        let (game_state, player_rack) = redact(state, viewer);
        ServerEvent::GameStateUpdate {
            game_state,
            player_rack,
        }
    }

    /// Report a failed action to the player who sent it.
    #[must_use]
    pub fn error(err: &GameError) -> Self {
        ServerEvent::Error {
            message: err.to_string(),
        }
    }
}

/// One personalised update per seated player, in seat order.
#[must_use]
pub fn broadcast(state: &GameState) -> Vec<(PlayerId, ServerEvent)> {
    state
        .players()
        .iter()
        .map(|p| (p.id.clone(), ServerEvent::state_update(state, &p.id)))
        .collect()
}
