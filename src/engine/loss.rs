//! Loss detection.

use crate::board::Board;
use crate::core::Direction;

/// Whether any move is still possible.
///
/// True if there is an empty cell or two orthogonal neighbours could merge.
/// Each cell is visited once and compared with its north and west
/// neighbours, which covers every adjacent pair exactly once.
#[must_use]
pub fn has_moves(board: &Board) -> bool {
    let shape = board.shape();
    for pos in shape.positions() {
        let Some(tile) = board.get(pos) else {
            return true;
        };
        for direction in [Direction::Up, Direction::Left] {
            let neighbour = shape.neighbour(pos, direction).and_then(|n| board.get(n));
            if neighbour.is_some_and(|n| tile.merges_with(n)) {
                return true;
            }
        }
    }
    false
}
