// File: crates/tidyviz-core/tests/aggregation.rs
// Purpose: Coal aggregation properties: exact grouping, order independence, ranking, threshold.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tidyviz_core::{aggregate_production, AggregationConfig, PipelineError, ProductionRecord};

const COMMODITIES: [&str; 8] = [
    "Anthracite Coal",
    "Bituminous Coal",
    "Lignite Coal",
    "Metallurgical Coal",
    "Sub-Bituminous Coal",
    "Thermal Coal",
    "Oil & NGL",
    "Natural Gas",
];

fn random_records(rng: &mut StdRng, n: usize) -> Vec<ProductionRecord> {
    let mut rows: Vec<ProductionRecord> = (0..n)
        .map(|_| {
            let commodity = COMMODITIES[rng.random_range(0..COMMODITIES.len())];
            let value = rng.random_range(0.0..400.0);
            ProductionRecord::new(rng.random_range(1880..2023), commodity, value)
        })
        .collect();
    // guarantee the reference year and the threshold both exist
    rows.push(ProductionRecord::new(2022, "Thermal Coal", 500.0));
    rows
}

fn expected_total(rows: &[ProductionRecord], cfg: &AggregationConfig) -> f64 {
    rows.iter()
        .filter(|r| cfg.qualifying.contains(&r.commodity) && r.year >= cfg.min_year)
        .map(|r| r.production_value)
        .sum()
}

#[test]
fn grand_total_matches_filtered_input() {
    let cfg = AggregationConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let rows = random_records(&mut rng, 2_000);
    let series = aggregate_production(&rows, &cfg).expect("aggregate");
    let got: f64 = series.points.iter().map(|p| p.n).sum();
    let want = expected_total(&rows, &cfg);
    assert!((got - want).abs() <= 1e-6 * want.max(1.0), "got {got}, want {want}");
}

#[test]
fn shuffling_input_does_not_change_result() {
    let cfg = AggregationConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut rows = random_records(&mut rng, 1_500);
    let baseline = aggregate_production(&rows, &cfg).expect("aggregate");
    for _ in 0..5 {
        rows.shuffle(&mut rng);
        let again = aggregate_production(&rows, &cfg).expect("aggregate shuffled");
        assert_eq!(again.points, baseline.points);
        assert_eq!(again.order, baseline.order);
        assert_eq!(again.threshold_year, baseline.threshold_year);
    }
}

#[test]
fn each_group_appears_once() {
    let cfg = AggregationConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let rows = random_records(&mut rng, 800);
    let series = aggregate_production(&rows, &cfg).expect("aggregate");
    let mut keys: Vec<(i32, &str)> = series.points.iter().map(|p| (p.year, p.category.as_str())).collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
    assert!(series.points.iter().all(|p| p.year >= cfg.min_year));
    assert!(series.points.iter().all(|p| !p.category.contains(" Coal")));
    assert!(series.points.iter().all(|p| p.category != "Natural Gas" && p.category != "Oil & NGL"));
}

#[test]
fn bituminous_ranks_before_lignite() {
    let cfg = AggregationConfig::default();
    let rows = vec![
        ProductionRecord::new(2022, "Lignite Coal", 200.0),
        ProductionRecord::new(2022, "Bituminous Coal", 300.0),
        ProductionRecord::new(2022, "Bituminous Coal", 200.0),
    ];
    let series = aggregate_production(&rows, &cfg).expect("aggregate");
    assert_eq!(series.order.categories, vec!["Bituminous", "Lignite"]);
    let bituminous = series.points.iter().find(|p| p.category == "Bituminous").expect("row");
    assert_eq!(bituminous.n, 500.0);
    assert_eq!(bituminous.category_rank, 0);
}

#[test]
fn rank_is_shared_by_every_row_of_a_category() {
    let cfg = AggregationConfig::default();
    let rows = vec![
        ProductionRecord::new(1990, "Lignite Coal", 900.0),
        ProductionRecord::new(1990, "Thermal Coal", 10.0),
        ProductionRecord::new(2022, "Lignite Coal", 5.0),
        ProductionRecord::new(2022, "Thermal Coal", 150.0),
    ];
    let series = aggregate_production(&rows, &cfg).expect("aggregate");
    for p in &series.points {
        let want = if p.category == "Thermal" { 0 } else { 1 };
        assert_eq!(p.category_rank, want, "{p:?}");
    }
    assert_eq!(series.threshold_year, 1990);
}

#[test]
fn threshold_year_scenario() {
    let cfg = AggregationConfig { reference_year: 1982, ..AggregationConfig::default() };
    let rows = vec![
        ProductionRecord::new(1980, "Lignite Coal", 80.0),
        ProductionRecord::new(1981, "Lignite Coal", 120.0),
        ProductionRecord::new(1982, "Lignite Coal", 150.0),
    ];
    let series = aggregate_production(&rows, &cfg).expect("aggregate");
    assert_eq!(series.threshold_year, 1981);
}

#[test]
fn no_year_over_limit_is_not_found() {
    let rows = vec![ProductionRecord::new(2022, "Lignite Coal", 99.0)];
    let err = aggregate_production(&rows, &AggregationConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::NotFound(_)));
}

#[test]
fn absent_reference_year_is_not_found() {
    let rows = vec![ProductionRecord::new(2021, "Lignite Coal", 999.0)];
    let err = aggregate_production(&rows, &AggregationConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::NotFound(ref msg) if msg.contains("2022")));
}
