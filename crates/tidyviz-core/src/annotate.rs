// File: crates/tidyviz-core/src/annotate.rs
// Summary: Caption/subtitle text, counts and gridline tables computed from reshaped rows.

use std::collections::BTreeMap;

use crate::aggregate::CoalSeries;
use crate::config::{CoalConfig, LeapDayConfig};
use crate::grid::{horizontal_segments, markers, value_markers, vertical_segments, Segment};
use crate::record::{EventKind, PlacedLabel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub births: usize,
    pub deaths: usize,
}

/// Text blocks drawn on the leap-day chart.
#[derive(Clone, Debug)]
pub struct LeapDayNotes {
    pub title: String,
    pub subtitle: Vec<String>,
    pub caption: String,
    pub counts: KindCounts,
}

/// Text blocks and guide geometry drawn on the coal chart.
#[derive(Clone, Debug)]
pub struct CoalNotes {
    pub title: String,
    pub subtitle: Vec<String>,
    pub caption: String,
    pub threshold_label: String,
    /// Years with a vertical gridline.
    pub year_markers: Vec<i32>,
    pub x_gridlines: Vec<Segment>,
    pub y_gridlines: Vec<Segment>,
    /// Largest stacked total over all years.
    pub y_max: f64,
}

pub fn count_by_kind(labels: &[PlacedLabel]) -> KindCounts {
    labels.iter().fold(KindCounts::default(), |mut acc, l| {
        match l.kind {
            EventKind::Birth => acc.births += 1,
            EventKind::Death => acc.deaths += 1,
        }
        acc
    })
}

/// Greedy word wrap to at most `width` characters per line.
/// Words are never split; a word longer than `width` gets a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn caption(source: &str, graphic: &str) -> String {
    format!("Data: {source} | Graphic: {graphic}")
}

pub fn leap_day_notes(births: &[PlacedLabel], deaths: &[PlacedLabel], cfg: &LeapDayConfig) -> LeapDayNotes {
    let counts = count_by_kind(&[births, deaths].concat());
    let subtitle = format!(
        "February 29 is a leap day (or 'leap year day'), an intercalary date added periodically \
         to create leap years in the Julian and Gregorian calendars. {} lists {} births and {} \
         deaths on a leap day since {}.",
        cfg.source_credit, counts.births, counts.deaths, cfg.min_year
    );
    LeapDayNotes {
        title: cfg.title.clone(),
        subtitle: wrap_text(&subtitle, cfg.wrap_width),
        caption: caption(&cfg.source_credit, &cfg.graphic_credit),
        counts,
    }
}

pub fn coal_notes(series: &CoalSeries, cfg: &CoalConfig) -> CoalNotes {
    let mut per_year: BTreeMap<i32, f64> = BTreeMap::new();
    for p in &series.points {
        *per_year.entry(p.year).or_default() += p.n;
    }
    let first = per_year.keys().next().copied().unwrap_or(cfg.aggregation.min_year);
    let last = per_year.keys().next_back().copied().unwrap_or(cfg.aggregation.reference_year);
    let y_max = per_year.values().copied().fold(0.0, f64::max);

    let year_markers = markers(first, last, cfg.decade_step);
    let xs: Vec<f64> = year_markers.iter().map(|&y| f64::from(y)).collect();
    let ys = value_markers(y_max, cfg.value_step);

    let limit = cfg.aggregation.limit;
    let subtitle = format!(
        "Coal output of the {} producers by type of coal, {first}-{last}. Layers are stacked \
         from largest to smallest {} output. Combined production first passed {limit} million \
         tonnes a year in {}.",
        cfg.source_credit, cfg.aggregation.reference_year, series.threshold_year
    );

    CoalNotes {
        title: cfg.title.clone(),
        subtitle: wrap_text(&subtitle, cfg.wrap_width),
        caption: caption(&cfg.source_credit, &cfg.graphic_credit),
        threshold_label: format!("{}: over {limit} Mt", series.threshold_year),
        x_gridlines: vertical_segments(&xs, 0.0, y_max),
        y_gridlines: horizontal_segments(&ys, f64::from(first), f64::from(last)),
        year_markers,
        y_max,
    }
}
