//! Launch options and logging setup.
//!
//! Options only seed the menu's initial selections; every session still gets an
//! explicit `SessionConfig`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use crate::core::MenuSettings;
use crate::types::{CharacterId, DifficultyProfile, CHARACTERS, TICK_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-runner", version, about = "Terminal endless runner")]
pub struct Args {
    /// Master RNG seed (defaults to the wall clock)
    #[arg(long, env = "TUI_RUNNER_SEED")]
    pub seed: Option<u64>,

    /// Initial difficulty: Easy, Medium, Hard or Impossible
    #[arg(long, env = "TUI_RUNNER_DIFFICULTY", default_value = "Medium")]
    pub difficulty: String,

    /// Initial character index
    #[arg(long, default_value_t = 0)]
    pub character: usize,

    /// Frame budget in milliseconds
    #[arg(long, default_value_t = TICK_MS, value_parser = clap::value_parser!(u32).range(1..))]
    pub tick_ms: u32,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long, env = "TUI_RUNNER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Resolve the named options against the catalogs.
    pub fn menu_settings(&self) -> Result<MenuSettings> {
        let difficulty = DifficultyProfile::from_name(&self.difficulty)
            .ok_or_else(|| anyhow!("unknown difficulty {:?}", self.difficulty))?;
        let character = CharacterId::from_index(self.character).ok_or_else(|| {
            anyhow!(
                "character index {} out of range (0..{})",
                self.character,
                CHARACTERS.len()
            )
        })?;

        Ok(MenuSettings {
            difficulty,
            character,
            seed: self.seed.unwrap_or_else(clock_seed),
        })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

/// Route `log` output to `path`, filtered by `RUST_LOG` (default `info`).
///
/// Without a path nothing is logged.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
