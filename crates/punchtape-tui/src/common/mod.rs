//! Widgets shared by the render functions.

mod half_block;
mod scrollbar;

pub use half_block::HalfBlockImage;
pub use scrollbar::Scrollbar;
