//! The board: linear cell index -> tile.
//!
//! Backed by `im::OrdMap`, so cloning a board is O(1) and a snapshot handed
//! to a renderer shares structure with the live board. Each occupied index
//! holds exactly one tile whose own position resolves to that index.

use im::OrdMap;
use log::debug;
use serde::{Deserialize, Serialize};

use super::tile::{is_tile_value, Tile};
use crate::core::{EngineError, EngineResult, GameConfig, GameRng, GridShape, Position};

/// Grid occupancy state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    tiles: OrdMap<usize, Tile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
            tiles: OrdMap::new(),
        }
    }

    /// Create a board with the two opening tiles.
    pub fn initialize(config: &GameConfig, rng: &mut GameRng) -> EngineResult<Self> {
        let mut board = Self::new(config);
        for _ in 0..2 {
            board.spawn_random(rng)?;
        }
        Ok(board)
    }

    /// Build a board from row-major values, 0 meaning empty.
    ///
    /// ```
    /// use tile_merge::board::Board;
    /// use tile_merge::core::{GameConfig, Position};
    ///
    /// let config = GameConfig::default().with_grid(2, 2);
    /// let board = Board::from_grid(&config, &[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(board.len(), 2);
    /// assert_eq!(board.value_at(Position::new(1, 1)), 4);
    /// ```
    pub fn from_grid<R: AsRef<[u32]>>(config: &GameConfig, grid: &[R]) -> EngineResult<Self> {
        let shape = config.shape();
        let mismatch = || EngineError::ShapeMismatch {
            rows: shape.rows,
            cols: shape.cols,
        };
        if grid.len() != shape.rows {
            return Err(mismatch());
        }

        let mut board = Self::new(config);
        for (row, values) in grid.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != shape.cols {
                return Err(mismatch());
            }
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if !is_tile_value(value) {
                    return Err(EngineError::InvalidTile(value));
                }
                board.insert(Tile::new(value, Position::new(row, col), config));
            }
        }
        Ok(board)
    }

    /// Row-major values, 0 meaning empty.
    #[must_use]
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        let shape = self.shape();
        (0..shape.rows)
            .map(|row| {
                (0..shape.cols)
                    .map(|col| self.value_at(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.config.shape()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() == self.shape().cell_count()
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&self.shape().index(pos))
    }

    /// Tile value at `pos`, or 0 if the cell is empty.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> u32 {
        self.get(pos).map_or(0, Tile::value)
    }

    /// Occupied cells in index order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.values()
    }

    /// Empty cells in index order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        let shape = self.shape();
        (0..shape.cell_count())
            .filter(|i| !self.tiles.contains_key(i))
            .map(|i| shape.position(i))
            .collect()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn value_sum(&self) -> u64 {
        self.tiles.values().map(|t| u64::from(t.value())).sum()
    }

    /// Largest tile value, or 0 on an empty board.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.tiles.values().map(Tile::value).max().unwrap_or(0)
    }

    /// Rebuild a board from tiles already keyed by their settled index.
    pub(crate) fn from_settled(config: &GameConfig, tiles: OrdMap<usize, Tile>) -> Self {
        let shape = config.shape();
        debug_assert!(tiles.iter().all(|(&i, t)| shape.index(t.position()) == i));
        Self {
            config: config.clone(),
            tiles,
        }
    }

    /// Place a tile at its own position, replacing any occupant.
    pub(crate) fn insert(&mut self, tile: Tile) {
        let index = self.shape().index(tile.position());
        self.tiles.insert(index, tile);
    }

    /// Spawn a 2 or 4 on a uniformly random empty cell.
    ///
    /// Fails with [`EngineError::BoardFull`] and leaves the board untouched
    /// when every cell is occupied.
    pub fn spawn_random(&mut self, rng: &mut GameRng) -> EngineResult<Tile> {
        let empty = self.empty_cells();
        let pos = *rng.choose(&empty).ok_or(EngineError::BoardFull)?;
        let value = if rng.gen_bool(self.config.four_probability) { 4 } else { 2 };

        let tile = Tile::new(value, pos, &self.config);
        debug!("spawned {} at {}", value, pos);
        self.insert(tile.clone());
        Ok(tile)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_grid() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { format!("{:>5}", ".") } else { format!("{v:>5}") })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(&GameConfig::default());
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 16);
        assert_eq!(board.max_value(), 0);
    }

    #[test]
    fn test_from_grid_roundtrip() {
        let config = GameConfig::default();
        let grid = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 0, 0], [16, 0, 0, 2]];
        let board = Board::from_grid(&config, &grid).unwrap();

        assert_eq!(board.len(), 5);
        assert_eq!(board.value_sum(), 32);
        assert_eq!(board.max_value(), 16);
        let expected: Vec<Vec<u32>> = grid.iter().map(|r| r.to_vec()).collect();
        assert_eq!(board.to_grid(), expected);
    }

    #[test]
    fn test_from_grid_rejects_bad_input() {
        let config = GameConfig::default().with_grid(2, 2);
        assert_eq!(
            Board::from_grid(&config, &[[2, 0]]),
            Err(EngineError::ShapeMismatch { rows: 2, cols: 2 })
        );
        assert_eq!(
            Board::from_grid(&config, &[vec![2, 0], vec![0]]),
            Err(EngineError::ShapeMismatch { rows: 2, cols: 2 })
        );
        assert_eq!(
            Board::from_grid(&config, &[[2, 3], [0, 0]]),
            Err(EngineError::InvalidTile(3))
        );
    }

    #[test]
    fn test_tile_positions_match_keys() {
        let config = GameConfig::default();
        let board = Board::from_grid(&config, &[[0, 2, 0, 0], [0, 0, 0, 4], [0; 4], [8, 0, 0, 0]])
            .unwrap();
        for tile in board.tiles() {
            assert_eq!(board.get(tile.position()), Some(tile));
        }
    }

    #[test]
    fn test_spawn_adds_one_tile() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);
        let mut board = Board::new(&config);

        for expected in 1..=16 {
            let tile = board.spawn_random(&mut rng).unwrap();
            assert_eq!(board.len(), expected);
            assert!(tile.value() == 2 || tile.value() == 4);
            assert_eq!(board.get(tile.position()), Some(&tile));
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_spawn_on_full_board_fails_without_mutation() {
        let config = GameConfig::default().with_grid(2, 2);
        let mut board = Board::from_grid(&config, &[[2, 4], [8, 16]]).unwrap();
        let before = board.clone();
        let mut rng = GameRng::new(1);

        assert_eq!(board.spawn_random(&mut rng), Err(EngineError::BoardFull));
        assert_eq!(board, before);
    }

    #[test]
    fn test_spawn_probability_extremes() {
        let mut rng = GameRng::new(3);

        let twos = GameConfig::default().with_four_probability(0.0);
        let mut board = Board::new(&twos);
        for _ in 0..16 {
            assert_eq!(board.spawn_random(&mut rng).unwrap().value(), 2);
        }

        let fours = GameConfig::default().with_four_probability(1.0);
        let mut board = Board::new(&fours);
        for _ in 0..16 {
            assert_eq!(board.spawn_random(&mut rng).unwrap().value(), 4);
        }
    }

    #[test]
    fn test_spawn_fills_last_empty_cell() {
        let config = GameConfig::default().with_grid(2, 2);
        let mut board = Board::from_grid(&config, &[[2, 4], [8, 0]]).unwrap();
        let tile = board.spawn_random(&mut GameRng::new(9)).unwrap();
        assert_eq!(tile.position(), Position::new(1, 1));
    }

    #[test]
    fn test_initialize_places_two_tiles() {
        let config = GameConfig::default();
        for seed in 0..20 {
            let board = Board::initialize(&config, &mut GameRng::new(seed)).unwrap();
            assert_eq!(board.len(), 2);
            assert!(board.tiles().all(|t| t.value() == 2 || t.value() == 4));
        }
    }

    #[test]
    fn test_display() {
        let config = GameConfig::default().with_grid(2, 2);
        let board = Board::from_grid(&config, &[[2, 0], [0, 1024]]).unwrap();
        assert_eq!(board.to_string(), "    2    .\n    . 1024\n");
    }
}
