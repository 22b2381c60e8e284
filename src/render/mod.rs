//! Read-only views over a finished grid

mod text;
mod vector;

pub use text::{render_ascii, render_summary};
pub use vector::{
    elevation_color, hex_corners, hex_to_pixel, Point2, RenderError, SvgRenderer, COLOR_HIGH,
    COLOR_LOW, COLOR_MEDIUM, DEFAULT_HEX_SIZE,
};
