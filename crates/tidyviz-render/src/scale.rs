// File: crates/tidyviz-render/src/scale.rs
// Summary: Linear data-to-pixel transforms for X and Y.

use crate::types::PixelRect;

/// Maps a data interval onto a pixel interval. Pixel bounds may be reversed (Y grows down).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        // zero-width domains would divide by zero
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }
}

/// X and Y scales for one plot area; data Y points up, pixel Y points down.
#[derive(Clone, Copy, Debug)]
pub struct DataWindow {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl DataWindow {
    pub fn new(rect: PixelRect, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            x: LinearScale::new(x_range.0, x_range.1, rect.left, rect.right),
            y: LinearScale::new(y_range.0, y_range.1, rect.bottom, rect.top),
        }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_is_flipped() {
        let w = DataWindow::new(PixelRect::from_ltrb(0.0, 0.0, 100.0, 200.0), (-8.0, 8.0), (-8.0, 8.0));
        assert_eq!(w.to_px(-8.0, -8.0), (0.0, 200.0));
        assert_eq!(w.to_px(8.0, 8.0), (100.0, 0.0));
        assert_eq!(w.to_px(0.0, 0.0), (50.0, 100.0));
    }

    #[test]
    fn degenerate_domain_is_finite() {
        let s = LinearScale::new(3.0, 3.0, 0.0, 10.0);
        assert!(s.to_px(3.0).is_finite());
    }
}
