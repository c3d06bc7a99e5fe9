//! Configuration for the board.
//!
//! Loads from `$FLAPBOARD_HOME/config.toml` with sensible defaults; a
//! missing file is not an error. Timing values are stored as plain
//! milliseconds so the file stays hand-editable.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::alphabet::AlphabetVariant;
use crate::layout::RowContent;
use crate::schedule::FlipTiming;

/// One page of board content: the rows displayed together, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub lines: Vec<RowContent>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Duration of one flip in milliseconds.
    pub step_ms: u64,

    /// Rest between consecutive flips of one reel, milliseconds.
    pub rest_ms: u64,

    /// Upper bound of the randomized start delay, milliseconds.
    pub jitter_ms: u64,

    /// Which card deck the reels carry.
    pub alphabet: AlphabetVariant,

    /// Seconds a settled page stays up before the next one is displayed.
    pub page_dwell_secs: u64,

    /// Fixed row count; unset means fit the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,

    /// Fixed column count; unset means fit the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,

    /// Pages rotated through in order. Empty means the built-in demo.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_ms: 250,
            rest_ms: 75,
            jitter_ms: 1200,
            alphabet: AlphabetVariant::Board,
            page_dwell_secs: 6,
            rows: None,
            cols: None,
            pages: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// The reel timing profile this config describes.
    pub fn timing(&self) -> FlipTiming {
        FlipTiming {
            step: Duration::from_millis(self.step_ms),
            rest: Duration::from_millis(self.rest_ms),
            jitter_max: Duration::from_millis(self.jitter_ms),
        }
    }

    /// How long a settled page stays up.
    pub fn page_dwell(&self) -> Duration {
        Duration::from_secs(self.page_dwell_secs)
    }

    /// Configured pages, or the built-in demo when none are set.
    pub fn effective_pages(&self) -> Vec<Page> {
        if self.pages.is_empty() {
            demo_pages()
        } else {
            self.pages.clone()
        }
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time; `flapboard config
/// init` writes it out verbatim.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// The built-in departure-board demo content.
pub fn demo_pages() -> Vec<Page> {
    vec![
        Page {
            lines: vec![
                RowContent::left("DEPARTURES"),
                RowContent::default(),
                RowContent::split("AMSTERDAM", "KL1021"),
                RowContent::split("BERLIN", "BA0982"),
                RowContent::split("LISBON", "TP0343"),
                RowContent::split("OSLO", "SK4725"),
            ],
        },
        Page {
            lines: vec![
                RowContent::left("DEPARTURES"),
                RowContent::default(),
                RowContent::split("REYKJAVIK", "FI0419"),
                RowContent::split("TOKYO", "JL0406"),
                RowContent::split("SAO PAULO", "LA8065"),
                RowContent::split("NAIROBI", "KQ0101"),
            ],
        },
    ]
}

pub mod paths {
    //! Path resolution for flapboard configuration and data directories.
    //!
    //! FLAPBOARD_HOME resolution order:
    //! 1. FLAPBOARD_HOME environment variable (if set)
    //! 2. ~/.config/flapboard (default)

    use std::path::PathBuf;

    /// Returns the flapboard home directory.
    ///
    /// Checks FLAPBOARD_HOME env var first, falls back to ~/.config/flapboard
    pub fn flapboard_home() -> PathBuf {
        if let Ok(home) = std::env::var("FLAPBOARD_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("flapboard"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        flapboard_home().join("config.toml")
    }

    /// Returns the directory tracing log files are written to.
    pub fn logs_dir() -> PathBuf {
        flapboard_home().join("logs")
    }
}
