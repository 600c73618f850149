//! Slide-and-merge resolution.
//!
//! Each lane (a row for LEFT/RIGHT, a column for UP/DOWN) is walked from the
//! target boundary backwards. Every tile either lands on the next free cell
//! or merges into the tile that landed just before it. A tile that was the
//! target of a merge is marked and can not absorb a second tile in the same
//! turn, so `[2, 2, 2, 2]` moved LEFT gives `[4, 4, _, _]`.

use im::OrdMap;
use smallvec::SmallVec;

use crate::board::{Board, Tile};
use crate::core::{Axis, Direction, GridShape, Position};

/// Cells of one lane, boundary cell first.
type Lane = SmallVec<[Position; 8]>;

/// One tile's journey during a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub from: Position,
    pub to: Position,
    /// Value the tile had before the turn.
    pub value: u32,
    /// The tile was merged into the tile resting at `to` and no longer exists.
    pub absorbed: bool,
}

impl Slide {
    #[must_use]
    pub fn distance(&self) -> usize {
        self.from.row.abs_diff(self.to.row) + self.from.col.abs_diff(self.to.col)
    }
}

/// Result of resolving one direction, before any spawn.
#[derive(Clone, Debug)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub board: Board,
    /// At least one tile changed cell or merged.
    pub moved: bool,
    /// Number of merged pairs.
    pub merges: usize,
    /// One entry per tile present before the move.
    pub slides: Vec<Slide>,
}

/// Cells of lane `lane` for `direction`, ordered from the target boundary.
fn lane_cells(shape: GridShape, direction: Direction, lane: usize) -> Lane {
    let len = shape.lane_length(direction);
    (0..len)
        .map(|step| {
            let forward = if direction.sign() < 0 { step } else { len - 1 - step };
            match direction.axis() {
                Axis::Col => Position::new(lane, forward),
                Axis::Row => Position::new(forward, lane),
            }
        })
        .collect()
}

/// Resolve every slide and merge for `direction`.
///
/// The input board is left untouched; the returned outcome owns the new
/// board. When nothing can move, the returned board equals the input.
#[must_use]
pub fn advance(board: &Board, direction: Direction) -> MoveOutcome {
    let config = board.config();
    let shape = board.shape();

    let mut settled: OrdMap<usize, Tile> = OrdMap::new();
    let mut slides = Vec::with_capacity(board.len());
    let mut merges = 0;

    for lane in 0..shape.lane_count(direction) {
        let cells = lane_cells(shape, direction, lane);
        // Tiles resting in this lane so far, with their merged-this-turn flag.
        let mut resting: SmallVec<[(Tile, bool); 8]> = SmallVec::new();

        for &from in &cells {
            let Some(tile) = board.get(from) else {
                continue;
            };

            let slot = resting.len();
            if let Some((target, merged)) = resting.last_mut() {
                if !*merged && target.merges_with(tile) {
                    target.double();
                    *merged = true;
                    merges += 1;
                    slides.push(Slide {
                        from,
                        to: cells[slot - 1],
                        value: tile.value(),
                        absorbed: true,
                    });
                    continue;
                }
            }

            slides.push(Slide {
                from,
                to: cells[slot],
                value: tile.value(),
                absorbed: false,
            });
            resting.push((tile.clone(), false));
        }

        for (slot, (mut tile, _)) in resting.into_iter().enumerate() {
            tile.rest_at(cells[slot], config);
            settled.insert(shape.index(tile.position()), tile);
        }
    }

    let moved = slides.iter().any(|s| s.absorbed || s.from != s.to);
    let board = if moved {
        Board::from_settled(config, settled)
    } else {
        board.clone()
    };

    MoveOutcome {
        direction,
        board,
        moved,
        merges,
        slides,
    }
}

/// Whether moving in `direction` would change the board.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    advance(board, direction).moved
}

/// Directions that would change the board, in [`Direction::ALL`] order.
#[must_use]
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(board, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn row_board(values: [u32; 4]) -> Board {
        let config = GameConfig::default();
        Board::from_grid(&config, &[values, [0; 4], [0; 4], [0; 4]]).unwrap()
    }

    #[test]
    fn test_lane_cells_order() {
        let shape = GridShape::new(3, 4);
        assert_eq!(
            lane_cells(shape, Direction::Left, 1).as_slice(),
            &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2), Position::new(1, 3)]
        );
        assert_eq!(
            lane_cells(shape, Direction::Right, 0).as_slice(),
            &[Position::new(0, 3), Position::new(0, 2), Position::new(0, 1), Position::new(0, 0)]
        );
        assert_eq!(
            lane_cells(shape, Direction::Up, 2).as_slice(),
            &[Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
        assert_eq!(
            lane_cells(shape, Direction::Down, 3).as_slice(),
            &[Position::new(2, 3), Position::new(1, 3), Position::new(0, 3)]
        );
    }

    #[test]
    fn test_no_chained_merges() {
        let outcome = advance(&row_board([2, 2, 2, 2]), Direction::Left);
        assert_eq!(outcome.board.to_grid()[0], vec![4, 4, 0, 0]);
        assert_eq!(outcome.merges, 2);
        assert!(outcome.moved);
    }

    #[test]
    fn test_merged_tile_blocks_later_arrival() {
        let outcome = advance(&row_board([2, 2, 4, 0]), Direction::Left);
        assert_eq!(outcome.board.to_grid()[0], vec![4, 4, 0, 0]);
        assert_eq!(outcome.merges, 1);
    }

    #[test]
    fn test_closest_pair_merges_first() {
        let outcome = advance(&row_board([2, 2, 2, 0]), Direction::Right);
        assert_eq!(outcome.board.to_grid()[0], vec![0, 0, 2, 4]);
    }

    #[test]
    fn test_slides_record_every_tile() {
        let outcome = advance(&row_board([0, 2, 0, 2]), Direction::Left);
        assert_eq!(outcome.slides.len(), 2);
        assert_eq!(
            outcome.slides[0],
            Slide { from: Position::new(0, 1), to: Position::new(0, 0), value: 2, absorbed: false }
        );
        assert_eq!(
            outcome.slides[1],
            Slide { from: Position::new(0, 3), to: Position::new(0, 0), value: 2, absorbed: true }
        );
        assert_eq!(outcome.slides[1].distance(), 3);
    }

    #[test]
    fn test_blocked_row_does_not_move() {
        let board = row_board([2, 4, 8, 16]);
        let outcome = advance(&board, Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(outcome.board, board);
        assert!(outcome.slides.iter().all(|s| s.from == s.to && !s.absorbed));
    }

    #[test]
    fn test_legal_directions() {
        assert_eq!(
            legal_directions(&row_board([2, 4, 8, 16])),
            vec![Direction::Down]
        );
        assert_eq!(
            legal_directions(&row_board([2, 2, 0, 0])),
            vec![Direction::Left, Direction::Right, Direction::Down]
        );
    }

    #[test]
    fn test_settled_pixels_match_cells() {
        let outcome = advance(&row_board([0, 0, 8, 8]), Direction::Left);
        let tile = outcome.board.get(Position::new(0, 0)).unwrap();
        assert_eq!(tile.value(), 16);
        assert_eq!(tile.pixel(), (0.0, 0.0));
    }

    #[test]
    fn test_fractional_tile_size_keeps_every_tile() {
        let grid = [[2, 0, 4, 8], [0, 16, 0, 2], [4, 0, 0, 32], [0; 4]];
        for size in [7.7_f32, 13.1, 49.9] {
            let config = GameConfig::default().with_tile_size(size, size);
            let board = Board::from_grid(&config, &grid).unwrap();
            for direction in Direction::ALL {
                let outcome = advance(&board, direction);
                assert_eq!(outcome.merges, 0, "size {size} {direction}");
                assert_eq!(outcome.board.len(), board.len(), "size {size} {direction}");
                assert_eq!(outcome.board.value_sum(), board.value_sum());
                for slide in &outcome.slides {
                    let tile = outcome.board.get(slide.to).unwrap();
                    assert_eq!(tile.position(), slide.to);
                    assert_eq!(tile.pixel(), crate::board::cell_origin(slide.to, &config));
                }
            }
        }
    }

    #[test]
    fn test_max_value_tiles_block() {
        let max = crate::board::MAX_TILE_VALUE;
        let outcome = advance(&row_board([max, max, 0, 0]), Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(outcome.merges, 0);

        let outcome = advance(&row_board([0, max, max, 0]), Direction::Right);
        assert_eq!(outcome.board.to_grid()[0], vec![0, 0, max, max]);
    }
}
