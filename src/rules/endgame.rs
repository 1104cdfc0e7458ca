//! End-of-game detection and final rack settlement.
//!
//! Checked after every state-changing transition. Two triggers:
//! - the player who just acted has emptied their rack and the bag is empty;
//! - consecutive passes outnumber the seated players.
//!
//! The rack-and-bag trigger is checked first.

use tracing::info;

use crate::core::state::{EndReason, GameState, GameStatus};

/// Finish `state` in place if a trigger fires, returning the reason.
///
/// `mover` is the seat index of the player who just acted.
pub(crate) fn settle(state: &mut GameState, mover: usize) -> Option<EndReason> {
    if state.status != GameStatus::Playing {
        return None;
    }

    let reason = if rack_and_bag_empty(state, mover) {
        let bonus: i32 = state
            .players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != mover)
            .map(|(_, p)| p.rack_points())
            .sum();
        for (i, player) in state.players.iter_mut().enumerate() {
            if i == mover {
                player.score += bonus;
            } else {
                player.score -= player.rack_points();
            }
        }
        EndReason::RackAndBagEmpty
    } else if state.consecutive_passes as usize > state.players.len() {
        for player in state.players.iter_mut() {
            player.score -= player.rack_points();
        }
        EndReason::ConsecutivePasses
    } else {
        return None;
    };

    state.status = GameStatus::Finished;
    state.end_reason = Some(reason);
    state.mark_active();

    info!(
        game = %state.id,
        ?reason,
        scores = ?state.players.iter().map(|p| (p.id.as_str(), p.score)).collect::<Vec<_>>(),
        "game finished"
    );

    Some(reason)
}

fn rack_and_bag_empty(state: &GameState, mover: usize) -> bool {
    state.bag.is_empty() && state.players.get(mover).is_some_and(|p| p.rack.is_empty())
}
