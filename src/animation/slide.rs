//! Slide interpolation.

use crate::board::{cell_at, cell_origin, Tile};
use crate::core::{Direction, GameConfig, Position};
use crate::engine::Slide;

/// A tile in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedTile {
    /// Tile with its pre-move value and a moving pixel position. Its cell is
    /// re-derived after every tick.
    pub tile: Tile,
    /// Where the tile comes to rest.
    pub target: Position,
    /// The tile disappears into the tile at `target` once it arrives.
    pub absorbed: bool,
}

impl AnimatedTile {
    #[must_use]
    pub fn is_arrived(&self, config: &GameConfig) -> bool {
        self.tile.pixel() == cell_origin(self.target, config)
    }

    /// Cell the tile occupies right now while travelling in `direction`.
    ///
    /// Part-way between two cells it still reports the cell it is leaving.
    #[must_use]
    pub fn current_cell(&self, direction: Direction, config: &GameConfig) -> Position {
        let (x, y) = self.tile.pixel();
        cell_at(x, y, direction, config)
    }
}

/// Pixel interpolation for one turn's slides.
///
/// ```
/// use tile_merge::animation::SlideAnimation;
/// use tile_merge::board::Board;
/// use tile_merge::core::{Direction, GameConfig};
/// use tile_merge::engine::advance;
///
/// let config = GameConfig::default();
/// let board = Board::from_grid(&config, &[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let outcome = advance(&board, Direction::Left);
///
/// let mut animation = SlideAnimation::new(&outcome.slides, Direction::Left, &config);
/// let ticks = animation.run_to_end();
/// assert_eq!(ticks, 30); // 600 px at 20 px per tick
/// ```
#[derive(Clone, Debug)]
pub struct SlideAnimation {
    tiles: Vec<AnimatedTile>,
    direction: Direction,
    config: GameConfig,
    ticks: u32,
}

impl SlideAnimation {
    #[must_use]
    pub fn new(slides: &[Slide], direction: Direction, config: &GameConfig) -> Self {
        let tiles = slides
            .iter()
            .map(|s| AnimatedTile {
                tile: Tile::new(s.value, s.from, config),
                target: s.to,
                absorbed: s.absorbed,
            })
            .collect();
        Self {
            tiles,
            direction,
            config: config.clone(),
            ticks: 0,
        }
    }

    /// Advance every moving tile by at most `velocity` pixels.
    ///
    /// Returns `true` while some tile is still moving after this tick.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        let step = self.config.velocity;
        for animated in &mut self.tiles {
            let (x, y) = animated.tile.pixel();
            let (tx, ty) = cell_origin(animated.target, &self.config);
            if (tx - x).abs() <= step && (ty - y).abs() <= step {
                // Last step lands exactly on the cell.
                animated.tile.rest_at(animated.target, &self.config);
            } else {
                animated
                    .tile
                    .move_by((tx - x).clamp(-step, step), (ty - y).clamp(-step, step));
                animated.tile.settle(self.direction, &self.config);
            }
        }
        self.ticks += 1;
        !self.is_finished()
    }

    /// Tick until every tile has arrived. Returns the number of ticks taken.
    pub fn run_to_end(&mut self) -> u32 {
        while self.tick() {}
        self.ticks
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tiles.iter().all(|t| t.is_arrived(&self.config))
    }

    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// All tiles of the current frame, absorbed ones included.
    #[must_use]
    pub fn frame(&self) -> &[AnimatedTile] {
        &self.tiles
    }

    /// Tiles a renderer should draw this frame: absorbed tiles vanish once
    /// the animation has finished.
    pub fn visible(&self) -> impl Iterator<Item = &AnimatedTile> + '_ {
        let finished = self.is_finished();
        self.tiles.iter().filter(move |t| !(finished && t.absorbed))
    }
}
