// File: crates/tidyviz-render/src/lib.rs
// Summary: Skia renderer crate; turns prepared tables into PNG bytes.

pub mod figure;
pub mod scale;
pub mod stacked_area;
pub mod text;
pub mod text_circle;
pub mod theme;
pub mod types;

pub use figure::{write_png, Figure, RenderOptions};
pub use stacked_area::{render_stacked_area, stack_layers};
pub use text::TextShaper;
pub use text_circle::render_text_circle;
pub use theme::Theme;
pub use types::{FigureSize, Insets};
