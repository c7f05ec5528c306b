// File: crates/coal-production/src/main.rs
// Summary: Loads Carbon Majors production, aggregates coal by type and year, and renders a PNG.

use anyhow::{Context, Result};
use tidyviz_core::load::fetch_production;
use tidyviz_core::{prepare_coal, CoalConfig, FetchOptions};
use tidyviz_render::{render_stacked_area, write_png, RenderOptions, Theme};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = CoalConfig::default();
    let records = fetch_production(&cfg.url, &FetchOptions::default())
        .with_context(|| format!("failed to load production data from '{}'", cfg.url))?;

    let table = prepare_coal(&records, &cfg).context("failed to reshape coal production")?;
    info!(
        "production first exceeded {} Mt in {}",
        cfg.aggregation.limit, table.series.threshold_year
    );

    let png = render_stacked_area(&table, &Theme::coal(), &RenderOptions::coal())
        .context("failed to render coal chart")?;
    write_png(&cfg.output_path, &png).with_context(|| format!("failed to write '{}'", cfg.output_path))?;

    Ok(())
}
