// File: crates/tidyviz-render/src/figure.rs
// Summary: Headless figure backed by a Skia CPU raster surface; PNG encoding and file output.

use skia_safe as skia;
use tidyviz_core::{PipelineError, Result};
use tracing::info;

use crate::types::{FigureSize, Insets};

pub struct RenderOptions {
    pub size: FigureSize,
    pub insets: Insets,
    /// Off for snapshot tests; text shaping varies with installed fonts.
    pub draw_text: bool,
}

impl RenderOptions {
    pub fn leap_day() -> Self {
        Self { size: FigureSize::leap_day(), insets: Insets::uniform(60), draw_text: true }
    }

    pub fn coal() -> Self {
        Self { size: FigureSize::coal(), insets: Insets::new(220, 420, 520, 200), draw_text: true }
    }
}

impl Default for RenderOptions {
    fn default() -> Self { Self::leap_day() }
}

pub struct Figure {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Figure {
    /// Blank figure filled with `background`.
    pub fn new(size: FigureSize, background: skia::Color) -> Result<Self> {
        let (width, height) = (size.width_px(), size.height_px());
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| PipelineError::Render(format!("failed to create {width}x{height} raster surface")))?;
        surface.canvas().clear(background);
        Ok(Self { surface, width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Snapshot the surface and encode it as PNG.
    pub fn encode_png(mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PipelineError::Render("encode PNG failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }
}

/// Write encoded bytes to `path`, creating parent directories.
pub fn write_png(path: impl AsRef<std::path::Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

// ---- paint helpers ----------------------------------------------------------

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}
