//! Paper tape model and rendering core.
//!
//! Bytes become columns of holes: eight data channels, most significant bit
//! on top, with a row of sprocket holes between channels 0x08 and 0x04.
//! Nothing in here touches a terminal; hosts supply a `DrawingSurface`.

pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod holes;
pub mod model;
pub mod render;
pub mod surface;
pub mod viewport;

pub use canvas::PixelCanvas;
pub use config::{Config, Palette, ViewerConfig};
pub use error::{Result, TapeError};
pub use geometry::TapeGeometry;
pub use holes::{HoleCommand, HoleKind, VisibleRect, generate_holes};
pub use model::TapeModel;
pub use render::{Drawable, TapeView};
pub use surface::{DrawingSurface, Rgb};
pub use viewport::{ScrollBounds, Viewport};
