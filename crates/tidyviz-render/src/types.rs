// File: crates/tidyviz-render/src/types.rs
// Summary: Figure sizes (inches at a fixed DPI), margins and pixel rectangles.

/// Output resolution for every figure.
pub const DPI: f32 = 300.0;

/// Physical figure size; pixel size follows from `dpi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in, dpi: DPI }
    }

    /// Square 8in figure for the leap-day text circle.
    pub const fn leap_day() -> Self { Self::new(8.0, 8.0) }

    /// Wide 10x6in figure for the coal stacked area.
    pub const fn coal() -> Self { Self::new(10.0, 6.0) }

    pub fn width_px(&self) -> i32 { (self.width_in * self.dpi).round() as i32 }
    pub fn height_px(&self) -> i32 { (self.height_in * self.dpi).round() as i32 }

    /// Pixels per typographic point.
    pub fn px_per_pt(&self) -> f32 { self.dpi / 72.0 }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self { Self::new(v, v, v, v) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(60)
    }
}

/// Pixel rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Area of a `width` x `height` surface left after removing `insets`.
    pub fn inset(width: i32, height: i32, insets: Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: (width - insets.right as i32) as f32,
            bottom: (height - insets.bottom as i32) as f32,
        }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_follow_dpi() {
        let s = FigureSize::coal();
        assert_eq!((s.width_px(), s.height_px()), (3000, 1800));
        assert_eq!(FigureSize::leap_day().width_px(), 2400);
    }

    #[test]
    fn inset_rect() {
        let r = PixelRect::inset(100, 50, Insets::new(10, 5, 2, 8));
        assert_eq!(r, PixelRect::from_ltrb(10.0, 2.0, 95.0, 42.0));
        assert_eq!(r.width(), 85.0);
    }
}
