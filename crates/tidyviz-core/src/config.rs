// File: crates/tidyviz-core/src/config.rs
// Summary: Fixed pipeline parameters (sources, thresholds, rings, wording) with defaults.

use std::f64::consts::PI;
use std::time::Duration;

const TIDYTUESDAY: &str = "https://raw.githubusercontent.com/rfordatascience/tidytuesday/master/data/2024";

/// Options for the single blocking GET the loader performs.
#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30) }
    }
}

/// Angular interval and radius for one ring of labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub start: f64,
    pub end: f64,
    pub radius: f64,
}

impl Ring {
    /// Ring spanning pi/4..7pi/4, leaving the right-hand gap for the title block.
    pub fn with_radius(radius: f64) -> Self {
        Self { start: PI / 4.0, end: 7.0 * PI / 4.0, radius }
    }
}

#[derive(Clone, Debug)]
pub struct LeapDayConfig {
    pub births_url: String,
    pub deaths_url: String,
    pub min_year: i32,
    pub birth_ring: Ring,
    pub death_ring: Ring,
    /// Characters per subtitle line.
    pub wrap_width: usize,
    pub title: String,
    pub source_credit: String,
    pub graphic_credit: String,
    pub output_path: String,
}

impl Default for LeapDayConfig {
    fn default() -> Self {
        Self {
            births_url: format!("{TIDYTUESDAY}/2024-02-27/births.csv"),
            deaths_url: format!("{TIDYTUESDAY}/2024-02-27/deaths.csv"),
            min_year: 1900,
            birth_ring: Ring::with_radius(6.0),
            death_ring: Ring::with_radius(3.0),
            wrap_width: 48,
            title: "Take a leap! Births and deaths on February 29th".to_string(),
            source_credit: "Wikipedia".to_string(),
            graphic_credit: "tidyviz".to_string(),
            output_path: "target/out/leap_day.png".to_string(),
        }
    }
}

/// Parameters of the coal aggregation stage.
#[derive(Clone, Debug)]
pub struct AggregationConfig {
    /// Raw commodity names that count as coal.
    pub qualifying: Vec<String>,
    /// Substring removed from each qualifying name for display.
    pub strip: String,
    pub min_year: i32,
    /// Year whose values fix the stacking order.
    pub reference_year: i32,
    /// Per-year total (million tonnes) the threshold year must exceed.
    pub limit: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        let qualifying = [
            "Anthracite Coal",
            "Bituminous Coal",
            "Lignite Coal",
            "Metallurgical Coal",
            "Sub-Bituminous Coal",
            "Thermal Coal",
        ];
        Self {
            qualifying: qualifying.iter().map(|s| s.to_string()).collect(),
            strip: " Coal".to_string(),
            min_year: 1900,
            reference_year: 2022,
            limit: 100.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CoalConfig {
    pub url: String,
    pub aggregation: AggregationConfig,
    /// Spacing of the vertical decade gridlines, in years.
    pub decade_step: i32,
    /// Spacing of the horizontal gridlines, in million tonnes.
    pub value_step: f64,
    pub wrap_width: usize,
    pub title: String,
    pub source_credit: String,
    pub graphic_credit: String,
    pub output_path: String,
}

impl Default for CoalConfig {
    fn default() -> Self {
        Self {
            url: format!("{TIDYTUESDAY}/2024-05-21/emissions.csv"),
            aggregation: AggregationConfig::default(),
            decade_step: 20,
            value_step: 1000.0,
            wrap_width: 70,
            title: "A century of coal".to_string(),
            source_credit: "Carbon Majors".to_string(),
            graphic_credit: "tidyviz".to_string(),
            output_path: "target/out/coal_production.png".to_string(),
        }
    }
}
