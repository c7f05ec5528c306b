// File: crates/leap-day/src/main.rs
// Summary: Loads births/deaths on February 29, lays them out on two rings, and renders a PNG.

use anyhow::{Context, Result};
use tidyviz_core::load::fetch_life_events;
use tidyviz_core::{prepare_leap_day, EventKind, FetchOptions, LeapDayConfig};
use tidyviz_render::{render_text_circle, write_png, RenderOptions, Theme};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = LeapDayConfig::default();
    let fetch = FetchOptions::default();

    let births = fetch_life_events(&cfg.births_url, EventKind::Birth, &fetch)
        .with_context(|| format!("failed to load births from '{}'", cfg.births_url))?;
    let deaths = fetch_life_events(&cfg.deaths_url, EventKind::Death, &fetch)
        .with_context(|| format!("failed to load deaths from '{}'", cfg.deaths_url))?;

    let table = prepare_leap_day(&births, &deaths, &cfg);
    info!("subtitle: {}", table.notes.subtitle.join(" "));

    let png = render_text_circle(&table, &Theme::leap_day(), &RenderOptions::leap_day())
        .context("failed to render leap-day chart")?;
    write_png(&cfg.output_path, &png).with_context(|| format!("failed to write '{}'", cfg.output_path))?;

    Ok(())
}
