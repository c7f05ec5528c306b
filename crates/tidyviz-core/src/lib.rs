// File: crates/tidyviz-core/src/lib.rs
// Summary: Core library entry point; loading, reshaping and annotation for both chart pipelines.

pub mod aggregate;
pub mod annotate;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod load;
pub mod pipeline;
pub mod record;

pub use aggregate::{aggregate_production, CategoryOrder, CoalSeries};
pub use annotate::{wrap_text, CoalNotes, KindCounts, LeapDayNotes};
pub use config::{AggregationConfig, CoalConfig, FetchOptions, LeapDayConfig, Ring};
pub use error::{PipelineError, Result};
pub use layout::place_on_ring;
pub use pipeline::{prepare_coal, prepare_leap_day, CoalTable, LeapDayTable};
pub use record::{EventKind, LifeEvent, PlacedLabel, ProductionRecord, SeriesPoint};
