//! Transition errors.
//!
//! Two kinds, kept apart so the host can route them:
//! - `Rejection`: the action is well-formed but the rules refuse it. State is
//!   unchanged; only the acting player needs to hear about it.
//! - `InvalidAction`: the caller broke a structural contract (a tile that is
//!   not on the actor's rack, a square off the board). Programmer error.

use thiserror::Error;

use super::player::PlayerId;
use super::state::GameStatus;
use super::tile::TileId;
use crate::board::Position;

/// The rules refuse an otherwise well-formed action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("action needs status {expected:?}, game is {actual:?}")]
    WrongStatus {
        expected: GameStatus,
        actual: GameStatus,
    },

    #[error("it is not {player}'s turn")]
    OutOfTurn { player: PlayerId },

    #[error("{player} already joined")]
    AlreadyJoined { player: PlayerId },

    #[error("no tiles placed")]
    NoTilesPlaced,

    #[error("no tiles to exchange")]
    NothingToExchange,

    #[error("square {0} is already occupied")]
    Occupied(Position),

    #[error("placed tiles are not on a single row or column")]
    NotInLine,

    #[error("gap in the main line at {0}")]
    Gap(Position),

    #[error("the first move must cover the centre square")]
    MissesCenter,

    #[error("placed tiles do not touch any tile already on the board")]
    Disconnected,

    #[error("no word of two or more letters formed")]
    NoWordFormed,

    #[error("{0:?} is not in the dictionary")]
    UnknownWord(String),
}

/// The action breaks a structural contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidAction {
    #[error("{player} is not seated in this game")]
    UnknownPlayer { player: PlayerId },

    #[error("join profile {profile} does not match actor {actor}")]
    ActorMismatch { actor: PlayerId, profile: PlayerId },

    #[error("{tile} is not on {player}'s rack")]
    TileNotInRack { player: PlayerId, tile: TileId },

    #[error("{0} appears more than once in one action")]
    DuplicateTile(TileId),

    #[error("square {0} targeted more than once in one action")]
    DuplicatePosition(Position),

    #[error("square {0} is off the board")]
    OffBoard(Position),

    #[error("joker {0} needs an assigned letter A-Z")]
    UnassignedJoker(TileId),

    #[error("{0} is not a joker and cannot take an assigned letter")]
    AssignedNonJoker(TileId),
}

/// Error returned by every transition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("invalid action: {0}")]
    Invalid(#[from] InvalidAction),
}

impl GameError {
    /// True for rule refusals, false for caller contract violations.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameError::Rejected(_))
    }

    /// The rejection reason, if this is one.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            GameError::Rejected(r) => Some(r),
            GameError::Invalid(_) => None,
        }
    }
}

/// Failure to encode or decode a binary snapshot.
#[derive(Debug, Error)]
#[error("snapshot codec failed: {0}")]
pub struct SnapshotError(#[from] pub bincode::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: GameError = Rejection::NotInLine.into();
        assert!(err.is_rejection());
        assert_eq!(err.rejection(), Some(&Rejection::NotInLine));

        let err: GameError = InvalidAction::DuplicateTile(TileId(3)).into();
        assert!(!err.is_rejection());
        assert_eq!(err.rejection(), None);
    }

    #[test]
    fn test_messages() {
        let err = GameError::from(Rejection::UnknownWord("QZX".into()));
        assert_eq!(err.to_string(), "rejected: \"QZX\" is not in the dictionary");

        let err = GameError::from(InvalidAction::TileNotInRack {
            player: PlayerId::new("p1"),
            tile: TileId(7),
        });
        assert_eq!(err.to_string(), "invalid action: Tile(7) is not on p1's rack");

        let err = Rejection::Gap(Position::new(7, 9));
        assert_eq!(err.to_string(), "gap in the main line at (7, 9)");
    }
}
