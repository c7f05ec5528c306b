// File: crates/tidyviz-render/tests/common/mod.rs
// Purpose: Small deterministic tables shared by the render tests.

use tidyviz_core::{
    prepare_coal, prepare_leap_day, CoalConfig, CoalTable, EventKind, LeapDayConfig, LeapDayTable, LifeEvent,
    ProductionRecord,
};

pub fn leap_day_table() -> LeapDayTable {
    let births: Vec<LifeEvent> = (0..24)
        .map(|i| LifeEvent::new(format!("Born {i}"), " musician ", 1900 + i * 4, EventKind::Birth))
        .collect();
    let deaths: Vec<LifeEvent> = (0..10)
        .map(|i| LifeEvent::new(format!("Died {i}"), "writer", 1904 + i * 8, EventKind::Death))
        .collect();
    prepare_leap_day(&births, &deaths, &LeapDayConfig::default())
}

pub fn coal_table() -> CoalTable {
    let kinds = ["Bituminous Coal", "Lignite Coal", "Thermal Coal", "Anthracite Coal"];
    let rows: Vec<ProductionRecord> = (1900..=2022)
        .flat_map(|year| {
            kinds.iter().enumerate().map(move |(k, kind)| {
                let growth = f64::from(year - 1900) * (k as f64 + 1.0);
                ProductionRecord::new(year, *kind, 5.0 + growth)
            })
        })
        .collect();
    prepare_coal(&rows, &CoalConfig::default()).expect("coal fixture")
}
