// File: crates/tidyviz-render/src/theme.rs
// Summary: Per-figure colour and font presets handed to the renderers.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    /// Births ring on the leap-day chart; threshold marker on the coal chart.
    pub highlight: skia::Color,
    /// Deaths ring on the leap-day chart.
    pub secondary: skia::Color,
    /// Fill colours by category rank; reused cyclically.
    pub palette: Vec<skia::Color>,
    pub body_fonts: &'static [&'static str],
    pub title_fonts: &'static [&'static str],
    /// Base text sizes in points.
    pub label_pt: f32,
    pub body_pt: f32,
    pub title_pt: f32,
    pub caption_pt: f32,
}

const BODY_FONTS: &[&str] = &["Roboto", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];
const TITLE_FONTS: &[&str] = &["Roboto Slab", "Georgia", "DejaVu Serif", "serif"];

impl Theme {
    pub fn leap_day() -> Self {
        Self {
            name: "leap-day",
            background: skia::Color::from_rgb(0xfa, 0xfa, 0xfa),
            text: skia::Color::from_rgb(0x0d, 0x0d, 0x0d), // gray5
            grid: skia::Color::from_rgb(0xe0, 0xe0, 0xe0),
            highlight: skia::Color::from_rgb(0x35, 0x97, 0x8f),
            secondary: skia::Color::from_rgb(0xbf, 0x81, 0x2d),
            palette: Vec::new(),
            body_fonts: BODY_FONTS,
            title_fonts: TITLE_FONTS,
            label_pt: 4.0,
            body_pt: 9.0,
            title_pt: 15.0,
            caption_pt: 7.0,
        }
    }

    pub fn coal() -> Self {
        Self {
            name: "coal",
            background: skia::Color::from_rgb(0xfa, 0xfa, 0xfa),
            text: skia::Color::from_rgb(0x0d, 0x0d, 0x0d),
            grid: skia::Color::from_rgb(0xd9, 0xd9, 0xd9),
            highlight: skia::Color::from_rgb(0xb2, 0x18, 0x2b),
            secondary: skia::Color::from_rgb(0x5a, 0x5a, 0x5a),
            palette: vec![
                skia::Color::from_rgb(0x2b, 0x1d, 0x14),
                skia::Color::from_rgb(0x5c, 0x40, 0x33),
                skia::Color::from_rgb(0x8c, 0x6d, 0x46),
                skia::Color::from_rgb(0xa6, 0x8a, 0x64),
                skia::Color::from_rgb(0xc2, 0xa8, 0x78),
                skia::Color::from_rgb(0xdd, 0xcc, 0xa9),
            ],
            body_fonts: BODY_FONTS,
            title_fonts: TITLE_FONTS,
            label_pt: 7.0,
            body_pt: 9.0,
            title_pt: 16.0,
            caption_pt: 7.0,
        }
    }

    /// Fill colour for a category rank.
    pub fn fill_for(&self, rank: usize) -> skia::Color {
        if self.palette.is_empty() {
            self.highlight
        } else {
            self.palette[rank % self.palette.len()]
        }
    }
}
