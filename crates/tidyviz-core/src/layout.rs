// File: crates/tidyviz-core/src/layout.rs
// Summary: Circular label layout for leap-day births/deaths (filter, label, theta, x/y, rotation).

use tracing::debug;

use crate::config::Ring;
use crate::geometry::{label_rotation, polar_to_cartesian};
use crate::grid::linspace;
use crate::record::{LifeEvent, PlacedLabel};

/// Rows with `year >= min_year`, in their original order.
pub fn filter_since(events: &[LifeEvent], min_year: i32) -> Vec<LifeEvent> {
    events.iter().filter(|e| e.year >= min_year).cloned().collect()
}

/// `"Person (description)"` with the description trimmed.
pub fn make_label(person: &str, description: &str) -> String {
    format!("{person} ({})", description.trim())
}

/// Evenly spaced angles over `[ring.start, ring.end]`, one per row.
/// Never divides by zero: one row sits at `ring.start`.
pub fn angular_positions(n: usize, ring: &Ring) -> Vec<f64> {
    linspace(ring.start, ring.end, n)
}

/// Filter to `min_year` and place the survivors around `ring` in input order.
pub fn place_on_ring(events: &[LifeEvent], min_year: i32, ring: &Ring) -> Vec<PlacedLabel> {
    let kept = filter_since(events, min_year);
    let thetas = angular_positions(kept.len(), ring);
    debug!("placing {} of {} rows on ring r={}", kept.len(), events.len(), ring.radius);

    kept.into_iter()
        .zip(thetas)
        .map(|(event, theta)| {
            let (x, y) = polar_to_cartesian(ring.radius, theta);
            PlacedLabel {
                label: make_label(&event.person, &event.description),
                person: event.person,
                kind: event.kind,
                year: event.year,
                theta,
                x,
                y,
                rotation: label_rotation(theta),
            }
        })
        .collect()
}
