//! Text rendering utilities.
//!
//! - [`visual_width`], [`cell_width`] - Terminal cell widths
//! - [`wrap_lines`] - Style-preserving line wrapping

mod width;
mod wrap;

pub use width::{cell_width, visual_width};
pub use wrap::wrap_lines;
