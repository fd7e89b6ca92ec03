//! Font metrics asset
//!
//! Text is laid out from a small JSON metrics file rather than a glyph
//! atlas: the terminal draws the characters itself, the game only needs
//! widths to center labels.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;

/// Default location of the bundled metrics file
pub const DEFAULT_FONT_PATH: &str = "assets/fonts/arial.json";

/// Failure loading a font metrics file
#[derive(Debug)]
pub enum FontError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid { path: PathBuf, reason: &'static str },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io { path, source } => {
                write!(f, "failed to read font {}: {}", path.display(), source)
            }
            FontError::Parse { path, source } => {
                write!(f, "failed to parse font {}: {}", path.display(), source)
            }
            FontError::Invalid { path, reason } => {
                write!(f, "invalid font {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io { source, .. } => Some(source),
            FontError::Parse { source, .. } => Some(source),
            FontError::Invalid { .. } => None,
        }
    }
}

/// Horizontal metrics for one font, in font units
#[derive(Debug, Clone, Deserialize)]
pub struct FontMetrics {
    pub name: String,
    pub units_per_em: u32,
    /// Advance used for characters missing from `advances`
    pub default_advance: u32,
    /// Line height in font units
    pub line_height: u32,
    #[serde(default)]
    pub advances: HashMap<char, u32>,
}

impl FontMetrics {
    /// Load and validate a metrics file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let metrics = Self::from_json(&json).map_err(|source| FontError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if metrics.units_per_em == 0 {
            return Err(FontError::Invalid {
                path: path.to_path_buf(),
                reason: "units_per_em must be positive",
            });
        }
        log::info!(
            "Loaded font {} ({} glyph advances)",
            metrics.name,
            metrics.advances.len()
        );
        Ok(metrics)
    }

    /// Load, or log a warning and carry on without text
    pub fn load_or_warn(path: impl AsRef<Path>) -> Option<Self> {
        match Self::load(path) {
            Ok(metrics) => Some(metrics),
            Err(e) => {
                log::warn!("{}; text will not be drawn", e);
                None
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn advance(&self, c: char) -> u32 {
        self.advances.get(&c).copied().unwrap_or(self.default_advance)
    }

    /// Rendered width and height of a single line of text at `size` world units
    pub fn measure(&self, text: &str, size: f32) -> Vec2 {
        if self.units_per_em == 0 {
            return Vec2::ZERO;
        }
        let scale = size / self.units_per_em as f32;
        let units: u32 = text.chars().map(|c| self.advance(c)).sum();
        Vec2::new(units as f32 * scale, self.line_height as f32 * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics::from_json(
            r#"{
                "name": "Test",
                "units_per_em": 1000,
                "default_advance": 500,
                "line_height": 1200,
                "advances": { "i": 250, " ": 300 }
            }"#,
        )
        .unwrap()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "orbit-shooter-font-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_measure() {
        let m = metrics();
        // a i space a b at 20/1000
        let size = m.measure("ai ab", 20.0);
        assert!((size.x - (500.0 + 250.0 + 300.0 + 500.0 + 500.0) * 0.02).abs() < 1e-4);
        assert!((size.y - 24.0).abs() < 1e-4);
        assert_eq!(m.measure("", 20.0).x, 0.0);
    }

    #[test]
    fn test_measure_scales_with_size() {
        let m = metrics();
        let small = m.measure("Score: 10", 10.0);
        let large = m.measure("Score: 10", 40.0);
        assert!((large.x - small.x * 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = FontMetrics::load("/nonexistent/orbit-shooter/font.json").unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
        assert!(FontMetrics::load_or_warn("/nonexistent/orbit-shooter/font.json").is_none());
    }

    #[test]
    fn test_load_malformed() {
        let path = temp_file("malformed", "{ not json");
        let err = FontMetrics::load(&path).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_rejects_zero_em() {
        let path = temp_file(
            "zero-em",
            r#"{"name":"Z","units_per_em":0,"default_advance":1,"line_height":1}"#,
        );
        let err = FontMetrics::load(&path).unwrap_err();
        assert!(matches!(err, FontError::Invalid { .. }));
        assert!(err.to_string().contains("units_per_em"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_bundled_font_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_FONT_PATH);
        let m = FontMetrics::load(path).unwrap();
        assert!(m.units_per_em > 0);
        assert!(m.measure("Orbit Shooter", 48.0).x > 0.0);
    }
}
