//! Game settings and preferences
//!
//! Read from a JSON file at startup. A missing or broken file never stops
//! the game: it falls back to defaults and says so in the log.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::renderer::font::DEFAULT_FONT_PATH;
use crate::sim::Difficulty;

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "ORBIT_SHOOTER_CONFIG";

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "orbit_shooter.json";

/// Failure reading a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "failed to access settings {}: {}", path.display(), source)
            }
            SettingsError::Parse { path, source } => {
                write!(f, "failed to parse settings {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Difficulty highlighted on the menu at startup
    pub difficulty: Difficulty,
    /// Fixed RNG seed; taken from the clock when absent
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Screen shake on hits
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,

    // === Assets ===
    pub font_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            screen_shake: true,
            reduced_motion: false,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Configured seed, or one derived from the system clock
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pick the settings file: explicit path, then the environment, then
    /// the working directory
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<String>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match env_value {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = Self::resolve_path(explicit, std::env::var(CONFIG_ENV).ok());
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

/// Command-line options
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "orbit-shooter")]
#[command(about = "Orbit the ring and shoot down everything heading for it")]
pub struct CliArgs {
    /// Settings file (overrides ORBIT_SHOOTER_CONFIG)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Starting difficulty: easy, medium or hard
    #[arg(long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

impl CliArgs {
    /// Apply overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
    }
}
