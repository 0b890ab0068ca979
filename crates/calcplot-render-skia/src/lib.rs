// File: crates/calcplot-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for calcplot scenes.

pub mod raster;
pub mod text;
pub mod theme;

pub use raster::{render_to_png, render_to_png_bytes, render_to_rgba8, RasterOptions};
pub use text::TextShaper;
pub use theme::Theme;
