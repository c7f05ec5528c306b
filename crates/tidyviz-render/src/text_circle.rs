// File: crates/tidyviz-render/src/text_circle.rs
// Summary: Leap-day chart: labels around two rings plus title, subtitle and caption boxes.

use skia_safe as skia;
use tidyviz_core::{LeapDayTable, PlacedLabel, Result};
use tracing::debug;

use crate::figure::{fill_paint, Figure, RenderOptions};
use crate::scale::DataWindow;
use crate::text::{Anchor, TextShaper, TextSpec};
use crate::theme::Theme;
use crate::types::PixelRect;

/// Data limits on both axes.
pub const LIMITS: (f64, f64) = (-8.0, 8.0);
/// Data-space anchors (left edge, vertical centre) of the title and subtitle boxes.
const TITLE_AT: (f64, f64) = (0.0, 1.2);
const SUBTITLE_AT: (f64, f64) = (0.0, -0.5);

/// Render the text-circle chart to PNG bytes.
pub fn render_text_circle(table: &LeapDayTable, theme: &Theme, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut figure = Figure::new(opts.size, theme.background)?;
    let plot = square_plot(PixelRect::inset(figure.width(), figure.height(), opts.insets));
    let window = DataWindow::new(plot, LIMITS, LIMITS);
    let px_per_pt = opts.size.px_per_pt();
    let canvas = figure.canvas();

    if !opts.draw_text {
        draw_markers(canvas, &window, &table.births, theme.highlight);
        draw_markers(canvas, &window, &table.deaths, theme.secondary);
        return figure.encode_png();
    }

    let shaper = TextShaper::new();
    draw_ring(canvas, &shaper, &window, &table.births, theme, theme.highlight, px_per_pt);
    draw_ring(canvas, &shaper, &window, &table.deaths, theme, theme.secondary, px_per_pt);

    let title = TextSpec { size_px: theme.title_pt * px_per_pt, color: theme.text, families: theme.title_fonts, bold: true };
    let body = TextSpec { size_px: theme.body_pt * px_per_pt, color: theme.text, families: theme.body_fonts, bold: false };
    draw_box(canvas, &shaper, &window, TITLE_AT, &table.notes.title, &title, plot.width() * 0.5, &[]);
    // the coloured words double as the legend for the two rings
    let legend = [("births", theme.highlight), ("deaths", theme.secondary)];
    let subtitle = table.notes.subtitle.join("\n");
    draw_box(canvas, &shaper, &window, SUBTITLE_AT, &subtitle, &body, plot.width() * 0.45, &legend);

    let caption = TextSpec { size_px: theme.caption_pt * px_per_pt, ..body };
    shaper.draw(canvas, &table.notes.caption, plot.left, plot.bottom - caption.size_px * 1.5, &caption, Anchor::Start);

    debug!("drew {} birth and {} death labels", table.births.len(), table.deaths.len());
    figure.encode_png()
}

/// Largest square centred in `rect`.
fn square_plot(rect: PixelRect) -> PixelRect {
    let side = rect.width().min(rect.height());
    let cx = rect.left + rect.width() * 0.5;
    let cy = rect.top + rect.height() * 0.5;
    PixelRect::from_ltrb(cx - side * 0.5, cy - side * 0.5, cx + side * 0.5, cy + side * 0.5)
}

fn draw_ring(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    window: &DataWindow,
    labels: &[PlacedLabel],
    theme: &Theme,
    color: skia::Color,
    px_per_pt: f32,
) {
    let spec = TextSpec { size_px: theme.label_pt * px_per_pt, color, families: theme.body_fonts, bold: false };
    for l in labels {
        let (px, py) = window.to_px(l.x, l.y);
        // text ends at the ring point and reads towards the centre
        shaper.draw_rotated(canvas, &l.label, px, py, l.rotation as f32, &spec, Anchor::End);
    }
}

fn draw_markers(canvas: &skia::Canvas, window: &DataWindow, labels: &[PlacedLabel], color: skia::Color) {
    let paint = fill_paint(color);
    for l in labels {
        let (px, py) = window.to_px(l.x, l.y);
        canvas.draw_circle((px, py), 6.0, &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_box(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    window: &DataWindow,
    at: (f64, f64),
    text: &str,
    spec: &TextSpec,
    width: f32,
    highlights: &[(&str, skia::Color)],
) {
    let (px, py) = window.to_px(at.0, at.1);
    let p = shaper.layout_highlighted(text, spec, width, highlights);
    p.paint(canvas, (px, py - p.height() * 0.5));
}
