// File: crates/tidyviz-core/src/pipeline.rs
// Summary: Transformer + Annotator wiring; turns loaded rows into plot-ready tables.

use tracing::info;

use crate::aggregate::{aggregate_production, CoalSeries};
use crate::annotate::{coal_notes, leap_day_notes, CoalNotes, LeapDayNotes};
use crate::config::{CoalConfig, LeapDayConfig};
use crate::error::Result;
use crate::layout::place_on_ring;
use crate::record::{LifeEvent, PlacedLabel, ProductionRecord};

/// Everything the text-circle renderer needs.
#[derive(Clone, Debug)]
pub struct LeapDayTable {
    /// Outer ring.
    pub births: Vec<PlacedLabel>,
    /// Inner ring.
    pub deaths: Vec<PlacedLabel>,
    pub notes: LeapDayNotes,
}

/// Everything the stacked-area renderer needs.
#[derive(Clone, Debug)]
pub struct CoalTable {
    pub series: CoalSeries,
    pub notes: CoalNotes,
}

pub fn prepare_leap_day(births: &[LifeEvent], deaths: &[LifeEvent], cfg: &LeapDayConfig) -> LeapDayTable {
    let births = place_on_ring(births, cfg.min_year, &cfg.birth_ring);
    let deaths = place_on_ring(deaths, cfg.min_year, &cfg.death_ring);
    let notes = leap_day_notes(&births, &deaths, cfg);
    info!("{} births and {} deaths since {}", notes.counts.births, notes.counts.deaths, cfg.min_year);
    LeapDayTable { births, deaths, notes }
}

pub fn prepare_coal(records: &[ProductionRecord], cfg: &CoalConfig) -> Result<CoalTable> {
    let series = aggregate_production(records, &cfg.aggregation)?;
    info!(
        "{} series points, stacking order {:?}, threshold year {}",
        series.points.len(),
        series.order.categories,
        series.threshold_year
    );
    let notes = coal_notes(&series, cfg);
    Ok(CoalTable { series, notes })
}
