use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use tile_merge::{run_loop, GameConfig, GameSession, LineInput, TextRenderer};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Play the sliding-tile merge puzzle in a terminal, one key per line (arrows as left/right/up/down or WASD, r to restart, q to quit)"
)]
struct Cli {
    /// TOML file with engine settings; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed (random when neither this nor the config file sets one)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Grid rows
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Probability that a spawned tile is a 4
    #[arg(long, value_name = "P")]
    four_probability: Option<f64>,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_toml_str_seeded(&contents, rand::random())
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default().with_seed(rand::random()),
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(p) = cli.four_probability {
        config.four_probability = p;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config(&cli)?;
    let mut session = GameSession::new(config)?;

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock());
    let mut renderer = TextRenderer::new(io::stdout());

    let last = run_loop(&mut session, &mut input, &mut renderer)?;
    info!(
        "finished after {} turn(s), max tile {}",
        last.turns,
        last.board.max_value()
    );
    Ok(())
}
