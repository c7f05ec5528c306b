// File: crates/tidyviz-render/src/stacked_area.rs
// Summary: Coal chart: stacked areas by category rank, gridlines, threshold marker, labels.

use skia_safe as skia;
use tidyviz_core::{CoalTable, Result, SeriesPoint};
use tracing::debug;

use crate::figure::{fill_paint, stroke_paint, Figure, RenderOptions};
use crate::scale::DataWindow;
use crate::text::{Anchor, TextShaper, TextSpec};
use crate::theme::Theme;
use crate::types::PixelRect;

/// Cumulative layer bounds per year. Layer 0 (rank 0) sits on the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    pub years: Vec<i32>,
    /// `lower[rank][i]` / `upper[rank][i]` bound layer `rank` at `years[i]`.
    pub lower: Vec<Vec<f64>>,
    pub upper: Vec<Vec<f64>>,
}

/// Stack `points` by `category_rank`; a category missing in a year contributes zero.
pub fn stack_layers(points: &[SeriesPoint], layers: usize) -> Stack {
    let mut years: Vec<i32> = points.iter().map(|p| p.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut values = vec![vec![0.0; years.len()]; layers];
    for p in points.iter().filter(|p| p.category_rank < layers) {
        if let Ok(i) = years.binary_search(&p.year) {
            values[p.category_rank][i] += p.n;
        }
    }

    let mut lower = Vec::with_capacity(layers);
    let mut upper = Vec::with_capacity(layers);
    let mut base = vec![0.0; years.len()];
    for layer in values {
        let top: Vec<f64> = base.iter().zip(&layer).map(|(b, v)| b + v).collect();
        lower.push(base);
        upper.push(top.clone());
        base = top;
    }
    Stack { years, lower, upper }
}

/// Render the stacked-area chart to PNG bytes.
pub fn render_stacked_area(table: &CoalTable, theme: &Theme, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut figure = Figure::new(opts.size, theme.background)?;
    let plot = PixelRect::inset(figure.width(), figure.height(), opts.insets);
    let px_per_pt = opts.size.px_per_pt();

    let stack = stack_layers(&table.series.points, table.series.order.len());
    let (first, last) = match (stack.years.first(), stack.years.last()) {
        (Some(&a), Some(&b)) => (f64::from(a), f64::from(b)),
        _ => (0.0, 1.0),
    };
    let y_top = table.notes.y_max.max(1.0) * 1.05;
    let window = DataWindow::new(plot, (first, last), (0.0, y_top));
    let canvas = figure.canvas();

    let grid = stroke_paint(theme.grid, 2.0);
    for s in table.notes.x_gridlines.iter().chain(&table.notes.y_gridlines) {
        canvas.draw_line(window.to_px(s.x0, s.y0), window.to_px(s.x1, s.y1), &grid);
    }

    for rank in 0..stack.lower.len() {
        let path = layer_path(&stack, rank, &window);
        canvas.draw_path(&path, &fill_paint(theme.fill_for(rank)));
    }

    let threshold_x = f64::from(table.series.threshold_year);
    let marker = stroke_paint(theme.highlight, 4.0);
    canvas.draw_line(window.to_px(threshold_x, 0.0), window.to_px(threshold_x, y_top), &marker);

    if opts.draw_text {
        draw_labels(canvas, table, &stack, &window, plot, theme, px_per_pt);
    }

    debug!("stacked {} layers over {} years", stack.lower.len(), stack.years.len());
    figure.encode_png()
}

/// Closed outline of one layer: upper edge left to right, lower edge back.
fn layer_path(stack: &Stack, rank: usize, window: &DataWindow) -> skia::Path {
    let mut path = skia::Path::new();
    for (i, &year) in stack.years.iter().enumerate() {
        let pt = window.to_px(f64::from(year), stack.upper[rank][i]);
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    for (i, &year) in stack.years.iter().enumerate().rev() {
        path.line_to(window.to_px(f64::from(year), stack.lower[rank][i]));
    }
    path.close();
    path
}

fn draw_labels(
    canvas: &skia::Canvas,
    table: &CoalTable,
    stack: &Stack,
    window: &DataWindow,
    plot: PixelRect,
    theme: &Theme,
    px_per_pt: f32,
) {
    let shaper = TextShaper::new();
    let notes = &table.notes;
    let title = TextSpec { size_px: theme.title_pt * px_per_pt, color: theme.text, families: theme.title_fonts, bold: true };
    let body = TextSpec { size_px: theme.body_pt * px_per_pt, color: theme.text, families: theme.body_fonts, bold: false };
    let small = TextSpec { size_px: theme.label_pt * px_per_pt, color: theme.text, ..body };

    let mut y = 60.0;
    let title_par = shaper.layout(&notes.title, &title, plot.width());
    title_par.paint(canvas, (plot.left, y));
    y += title_par.height() + 20.0;
    shaper.draw_lines(canvas, &notes.subtitle, plot.left, y, &body);

    // year labels under the decade gridlines
    for &year in &notes.year_markers {
        let (px, _) = window.to_px(f64::from(year), 0.0);
        let w = shaper.measure_width(&year.to_string(), &small);
        shaper.draw(canvas, &year.to_string(), px - w * 0.5, plot.bottom + 16.0, &small, Anchor::Start);
    }
    // value labels beside the horizontal gridlines
    for s in &notes.y_gridlines {
        let (_, py) = window.to_px(s.x0, s.y0);
        shaper.draw(canvas, &format!("{:.0}", s.y0), plot.left - 16.0, py - small.size_px * 0.6, &small, Anchor::End);
    }

    // category names at the right edge, centred on each layer's last value
    if let Some(last) = stack.years.len().checked_sub(1) {
        for (rank, category) in table.series.order.categories.iter().enumerate() {
            let mid = (stack.lower[rank][last] + stack.upper[rank][last]) * 0.5;
            let (px, py) = window.to_px(f64::from(stack.years[last]), mid);
            let spec = TextSpec { color: theme.fill_for(rank), bold: true, ..small };
            shaper.draw(canvas, category, px + 16.0, py - small.size_px * 0.6, &spec, Anchor::Start);
        }
    }

    let marker = TextSpec { color: theme.highlight, bold: true, ..small };
    let (mx, my) = window.to_px(f64::from(table.series.threshold_year), notes.y_max);
    shaper.draw(canvas, &notes.threshold_label, mx + 12.0, my, &marker, Anchor::Start);

    let caption = TextSpec { size_px: theme.caption_pt * px_per_pt, color: theme.secondary, ..body };
    shaper.draw(canvas, &notes.caption, plot.left, plot.bottom + 100.0, &caption, Anchor::Start);
}
