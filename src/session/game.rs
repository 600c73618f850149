//! Game session: board, loss flag and turn sequencing.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Direction, EngineResult, GameConfig, GameRng, Position};
use crate::engine::{apply_move, has_moves, legal_directions, TurnOutcome};

/// A command coming from the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

impl Command {
    /// Map a key name to a command.
    ///
    /// Arrow key names and WASD move, `r` restarts, `q` quits. Matching is
    /// case-insensitive and ignores surrounding whitespace.
    ///
    /// ```
    /// use tile_merge::core::Direction;
    /// use tile_merge::session::Command;
    ///
    /// assert_eq!(Command::from_key("a"), Some(Command::Move(Direction::Left)));
    /// assert_eq!(Command::from_key("Up"), Some(Command::Move(Direction::Up)));
    /// assert_eq!(Command::from_key("x"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let command = match key.trim().to_ascii_lowercase().as_str() {
            "left" | "a" => Command::Move(Direction::Left),
            "right" | "d" => Command::Move(Direction::Right),
            "up" | "w" => Command::Move(Direction::Up),
            "down" | "s" => Command::Move(Direction::Down),
            "r" | "restart" => Command::Restart,
            "q" | "quit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Read-only view handed to renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub lost: bool,
    /// Turns that changed the board since the last restart.
    pub turns: u32,
}

impl Snapshot {
    /// Occupied cells as `(position, value, pixel)`, in index order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, u32, (f32, f32))> + '_ {
        self.board
            .tiles()
            .map(|t| (t.position(), t.value(), t.pixel()))
    }
}

/// One game from opening board to loss, across restarts.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    lost: bool,
    turns: u32,
}

impl GameSession {
    /// Start a session with a freshly initialized board.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let board = Board::initialize(&config, &mut rng)?;
        info!(
            "new {}x{} game (seed {})",
            config.rows, config.cols, config.seed
        );
        Ok(Self {
            config,
            rng,
            board,
            lost: false,
            turns: 0,
        })
    }

    /// Start a session from an existing board, e.g. a saved puzzle.
    ///
    /// The session plays and restarts with the board's own config. The loss
    /// flag is evaluated immediately.
    pub fn with_board(board: Board) -> EngineResult<Self> {
        let config = board.config().clone();
        config.validate()?;
        let rng = GameRng::new(config.seed);
        let lost = board.is_full() && !has_moves(&board);
        Ok(Self {
            config,
            rng,
            board,
            lost,
            turns: 0,
        })
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
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Directions that would change the board. Empty once the game is lost.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        if self.lost {
            return Vec::new();
        }
        legal_directions(&self.board)
    }

    /// Play one turn.
    ///
    /// Returns `None` without touching anything while the game is lost;
    /// the caller must restart first.
    pub fn handle_direction(&mut self, direction: Direction) -> Option<TurnOutcome> {
        if self.lost {
            debug!("ignoring {} after loss", direction);
            return None;
        }

        let outcome = apply_move(&self.board, direction, &mut self.rng);
        if outcome.moved {
            self.turns += 1;
            self.board = outcome.board.clone();
        }
        self.lost = outcome.lost;
        Some(outcome)
    }

    /// Discard the board and start over with two fresh tiles.
    pub fn restart(&mut self) -> EngineResult<()> {
        self.board = Board::initialize(&self.config, &mut self.rng)?;
        self.lost = false;
        self.turns = 0;
        info!("restarted");
        Ok(())
    }

    /// Apply a command. Returns `false` when the session should end.
    pub fn handle_command(&mut self, command: Command) -> EngineResult<bool> {
        match command {
            Command::Move(direction) => {
                self.handle_direction(direction);
            }
            Command::Restart => self.restart()?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            lost: self.lost,
            turns: self.turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_keys() {
        let cases = [
            ("left", Command::Move(Direction::Left)),
            ("A", Command::Move(Direction::Left)),
            ("right", Command::Move(Direction::Right)),
            ("d", Command::Move(Direction::Right)),
            ("UP", Command::Move(Direction::Up)),
            ("w", Command::Move(Direction::Up)),
            (" down\n", Command::Move(Direction::Down)),
            ("s", Command::Move(Direction::Down)),
            ("r", Command::Restart),
            ("q", Command::Quit),
        ];
        for (key, expected) in cases {
            assert_eq!(Command::from_key(key), Some(expected), "key {key:?}");
        }
        assert_eq!(Command::from_key(""), None);
        assert_eq!(Command::from_key("jump"), None);
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(GameConfig::default()).unwrap();
        assert_eq!(session.board().len(), 2);
        assert!(!session.is_lost());
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_four_probability(2.0);
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_noop_move_does_not_count() {
        let config = GameConfig::default();
        let board = Board::from_grid(&config, &[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut session = GameSession::with_board(board.clone()).unwrap();

        let outcome = session.handle_direction(Direction::Up).unwrap();
        assert!(!outcome.moved);
        assert_eq!(session.turns(), 0);
        assert_eq!(session.board(), &board);
    }

    #[test]
    fn test_restart_keeps_board_shape() {
        let config = GameConfig::default().with_grid(2, 2).with_seed(3);
        let board = Board::from_grid(&config, &[[2, 0], [0, 4]]).unwrap();
        let mut session = GameSession::with_board(board).unwrap();
        assert_eq!(session.config(), &config);

        session.restart().unwrap();
        assert_eq!(session.board().shape(), config.shape());
        assert_eq!(session.board().to_grid().len(), 2);
        assert_eq!(session.board().len(), 2);
    }

    #[test]
    fn test_quit_command() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        assert!(session.handle_command(Command::Move(Direction::Left)).unwrap());
        assert!(!session.handle_command(Command::Quit).unwrap());
    }

    #[test]
    fn test_snapshot_cells() {
        let config = GameConfig::default();
        let board = Board::from_grid(&config, &[[0, 0, 0, 0], [0, 8, 0, 0], [0; 4], [0; 4]]).unwrap();
        let session = GameSession::with_board(board).unwrap();

        let cells: Vec<_> = session.snapshot().cells().collect();
        assert_eq!(cells, vec![(Position::new(1, 1), 8, (200.0, 200.0))]);
    }
}
