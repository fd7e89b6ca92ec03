//! Rendering module
//!
//! Builds triangle lists and text labels from the game state, then
//! rasterizes them in software for the terminal.

pub mod font;
pub mod raster;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use font::{FontError, FontMetrics};
pub use raster::PixelGrid;
pub use scene::{Frame, TextLabel, build_frame};
pub use vertex::Vertex;
