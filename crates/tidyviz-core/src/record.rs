// File: crates/tidyviz-core/src/record.rs
// Summary: Row types for both datasets, before and after reshaping.

use std::fmt;

/// Which leap-day table a row came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Birth,
    Death,
}

impl EventKind {
    /// Name of the year column in the source CSV for this kind.
    pub const fn year_column(&self) -> &'static str {
        match self {
            EventKind::Birth => "year_birth",
            EventKind::Death => "year_death",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Birth => f.write_str("birth"),
            EventKind::Death => f.write_str("death"),
        }
    }
}

/// One births.csv / deaths.csv row; `year` is the renamed year_birth/year_death column.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeEvent {
    pub person: String,
    pub description: String,
    pub year: i32,
    pub kind: EventKind,
}

impl LifeEvent {
    pub fn new(person: impl Into<String>, description: impl Into<String>, year: i32, kind: EventKind) -> Self {
        Self { person: person.into(), description: description.into(), year, kind }
    }
}

/// A life event placed on a ring.
/// Contract: `x*x + y*y == radius^2` and `rotation == 180 + theta` in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub person: String,
    pub kind: EventKind,
    pub year: i32,
    pub label: String,
    pub theta: f64,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// One emissions.csv row, reduced to the columns the coal chart needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionRecord {
    pub year: i32,
    pub commodity: String,
    pub production_value: f64,
}

impl ProductionRecord {
    pub fn new(year: i32, commodity: impl Into<String>, production_value: f64) -> Self {
        Self { year, commodity: commodity.into(), production_value }
    }
}

/// Summed production for one (year, category) group.
/// `category_rank` is 0 for the category drawn first (largest in the reference year).
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub year: i32,
    pub category: String,
    pub n: f64,
    pub category_rank: usize,
}
