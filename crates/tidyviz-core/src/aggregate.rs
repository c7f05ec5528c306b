// File: crates/tidyviz-core/src/aggregate.rs
// Summary: Coal production aggregation: filter, normalize, group-sum, rank, threshold year.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::config::AggregationConfig;
use crate::error::{PipelineError, Result};
use crate::record::{ProductionRecord, SeriesPoint};

/// A (year, category) group sum before ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupTotal {
    pub year: i32,
    pub category: String,
    pub n: f64,
}

/// Categories in display order; index == rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOrder {
    pub categories: Vec<String>,
}

impl CategoryOrder {
    pub fn rank_of(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    pub fn len(&self) -> usize { self.categories.len() }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }
}

/// Fully reshaped coal series.
#[derive(Clone, Debug)]
pub struct CoalSeries {
    /// Sorted by (year, category_rank).
    pub points: Vec<SeriesPoint>,
    pub order: CategoryOrder,
    /// First year whose total exceeds `AggregationConfig::limit`.
    pub threshold_year: i32,
}

/// Remove every occurrence of `strip` from a raw commodity name.
pub fn normalize_category(raw: &str, strip: &str) -> String {
    if strip.is_empty() { raw.to_string() } else { raw.replace(strip, "") }
}

/// Keep qualifying commodities, normalize names, sum per (year, category),
/// drop years before `cfg.min_year`. Output sorted by (year, category).
pub fn group_totals(records: &[ProductionRecord], cfg: &AggregationConfig) -> Vec<GroupTotal> {
    let mut groups: BTreeMap<(i32, String), Vec<f64>> = BTreeMap::new();
    for rec in records.iter().filter(|r| cfg.qualifying.iter().any(|q| q == &r.commodity)) {
        groups
            .entry((rec.year, normalize_category(&rec.commodity, &cfg.strip)))
            .or_default()
            .push(rec.production_value);
    }

    groups
        .into_iter()
        .filter(|((year, _), _)| *year >= cfg.min_year)
        .map(|((year, category), values)| GroupTotal { year, category, n: canonical_sum(values) })
        .collect()
}

/// Order categories by their total in `reference_year`, largest first.
/// Ties break by name; categories absent from that year follow, by name.
pub fn rank_categories(totals: &[GroupTotal], reference_year: i32) -> Result<CategoryOrder> {
    let mut in_reference: Vec<(&str, f64)> = totals
        .iter()
        .filter(|t| t.year == reference_year)
        .map(|t| (t.category.as_str(), t.n))
        .collect();
    if in_reference.is_empty() {
        return Err(PipelineError::NotFound(format!(
            "reference year {reference_year} has no rows to rank categories by"
        )));
    }
    in_reference.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut categories: Vec<String> = in_reference.iter().map(|(c, _)| c.to_string()).collect();
    let mut missing: Vec<String> = totals
        .iter()
        .map(|t| t.category.clone())
        .filter(|c| !categories.contains(c))
        .collect();
    missing.sort();
    missing.dedup();
    categories.extend(missing);

    Ok(CategoryOrder { categories })
}

/// Smallest year whose total across categories exceeds `limit`.
pub fn threshold_year(totals: &[GroupTotal], limit: f64) -> Result<i32> {
    let mut per_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for t in totals {
        per_year.entry(t.year).or_default().push(t.n);
    }
    per_year
        .into_iter()
        .find(|(_, values)| canonical_sum(values.clone()) > limit)
        .map(|(year, _)| year)
        .ok_or_else(|| PipelineError::NotFound(format!("no year with total production above {limit}")))
}

/// Full aggregation: group, rank, attach each category's rank to its rows,
/// and locate the threshold year.
pub fn aggregate_production(records: &[ProductionRecord], cfg: &AggregationConfig) -> Result<CoalSeries> {
    let totals = group_totals(records, cfg);
    let order = rank_categories(&totals, cfg.reference_year)?;
    let threshold_year = threshold_year(&totals, cfg.limit)?;
    debug!("{} groups across {} categories", totals.len(), order.len());

    let ranks: HashMap<&str, usize> =
        order.categories.iter().enumerate().map(|(i, c)| (c.as_str(), i)).collect();
    let mut points: Vec<SeriesPoint> = totals
        .into_iter()
        .map(|t| SeriesPoint {
            category_rank: ranks[t.category.as_str()],
            year: t.year,
            category: t.category,
            n: t.n,
        })
        .collect();
    points.sort_by(|a, b| a.year.cmp(&b.year).then(a.category_rank.cmp(&b.category_rank)));

    Ok(CoalSeries { points, order, threshold_year })
}

/// Sum in ascending order so the result does not depend on row order.
fn canonical_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}
