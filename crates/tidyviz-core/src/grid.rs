// File: crates/tidyviz-core/src/grid.rs
// Summary: Evenly spaced values plus gridline/marker segment tables for chart annotation.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// A single step yields `[start]`; zero steps yield nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            // pin the last value so it lands exactly on `end`
            (0..steps)
                .map(|i| if i == steps - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Multiples of `step` within `[start, end]`, e.g. decade markers.
pub fn markers(start: i32, end: i32, step: i32) -> Vec<i32> {
    if step <= 0 || end < start {
        return Vec::new();
    }
    let first = start.div_euclid(step) * step;
    let first = if first < start { first + step } else { first };
    (0..)
        .map(|k| first + k * step)
        .take_while(|v| *v <= end)
        .collect()
}

/// Multiples of `step` in `[0, max]`, for value-axis gridlines.
pub fn value_markers(max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= 0.0) {
        return Vec::new();
    }
    let count = (max / step).floor() as usize;
    (0..=count).map(|k| k as f64 * step).collect()
}

/// Straight line between two points in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// One vertical segment per x marker, from `y0` to `y1`.
pub fn vertical_segments(xs: &[f64], y0: f64, y1: f64) -> Vec<Segment> {
    xs.iter().map(|&x| Segment { x0: x, y0, x1: x, y1 }).collect()
}

/// One horizontal segment per y marker, from `x0` to `x1`.
pub fn horizontal_segments(ys: &[f64], x0: f64, x1: f64) -> Vec<Segment> {
    ys.iter().map(|&y| Segment { x0, y0: y, x1, y1: y }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn decade_markers() {
        assert_eq!(markers(1903, 1950, 10), vec![1910, 1920, 1930, 1940, 1950]);
        assert_eq!(markers(1900, 2022, 20), vec![1900, 1920, 1940, 1960, 1980, 2000, 2020]);
        assert!(markers(1900, 1800, 10).is_empty());
    }

    #[test]
    fn value_markers_include_zero() {
        assert_eq!(value_markers(2500.0, 1000.0), vec![0.0, 1000.0, 2000.0]);
        assert!(value_markers(10.0, 0.0).is_empty());
    }

    #[test]
    fn segments_span_requested_range() {
        let v = vertical_segments(&[1.0, 2.0], 0.0, 5.0);
        assert_eq!(v[1], Segment { x0: 2.0, y0: 0.0, x1: 2.0, y1: 5.0 });
        let h = horizontal_segments(&[3.0], -1.0, 1.0);
        assert_eq!(h, vec![Segment { x0: -1.0, y0: 3.0, x1: 1.0, y1: 3.0 }]);
    }
}
