//! A complete turn: resolve the move, spawn, check for loss.

use log::{debug, info};

use super::loss::has_moves;
use super::movement::{advance, Slide};
use crate::board::{Board, Tile};
use crate::core::{Direction, GameRng};

/// Result of one turn.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    pub direction: Direction,
    pub board: Board,
    /// Some tile changed cell or merged.
    pub moved: bool,
    /// Tile spawned after the move, if any.
    pub spawned: Option<Tile>,
    /// The board is full and no move is left.
    pub lost: bool,
    pub merges: usize,
    pub slides: Vec<Slide>,
}

impl TurnOutcome {
    #[must_use]
    pub fn spawned(&self) -> bool {
        self.spawned.is_some()
    }
}

/// Play one turn in `direction`.
///
/// A direction that moves nothing is a no-op: the board is returned as is
/// and no tile spawns. Otherwise one tile spawns and the loss check runs
/// against the board including it.
#[must_use]
pub fn apply_move(board: &Board, direction: Direction, rng: &mut GameRng) -> TurnOutcome {
    let outcome = advance(board, direction);
    let mut next = outcome.board;

    let spawned = if outcome.moved && !next.is_full() {
        // Guarded above, so this can not hit BoardFull.
        next.spawn_random(rng).ok()
    } else {
        None
    };

    let lost = next.is_full() && !has_moves(&next);

    if outcome.moved {
        debug!(
            "{}: {} merge(s), {} tile(s) on board",
            direction,
            outcome.merges,
            next.len()
        );
    } else {
        debug!("{}: nothing to move", direction);
    }
    if lost {
        info!("no moves left, max tile {}", next.max_value());
    }

    TurnOutcome {
        direction,
        board: next,
        moved: outcome.moved,
        spawned,
        lost,
        merges: outcome.merges,
        slides: outcome.slides,
    }
}
