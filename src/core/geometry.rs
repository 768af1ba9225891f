use serde::{Deserialize, Serialize};

/// Half-open containment test: `box_x <= px < box_x + box_width` and
/// `box_y <= py < box_y + box_height`.
///
/// Coordinates exactly on the right or bottom edge are outside. NaN on either
/// side is never inside.
#[must_use]
pub fn is_point_in_box(
    px: f64,
    py: f64,
    box_x: f64,
    box_y: f64,
    box_width: f64,
    box_height: f64,
) -> bool {
    box_x <= px && px < box_x + box_width && box_y <= py && py < box_y + box_height
}

/// Axis-aligned rectangle in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Same boundary rule as [`is_point_in_box`].
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        is_point_in_box(px, py, self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Space reserved around the plot area for axes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Padding {
    #[must_use]
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right, widened so hostile configs cannot overflow.
    #[must_use]
    pub const fn horizontal(self) -> u64 {
        self.left as u64 + self.right as u64
    }

    #[must_use]
    pub const fn vertical(self) -> u64 {
        self.top as u64 + self.bottom as u64
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(60, 20, 20, 40)
    }
}

#[cfg(test)]
mod tests {
    use super::{Padding, Rect, is_point_in_box};

    #[test]
    fn box_is_half_open() {
        assert!(is_point_in_box(0.0, 0.0, 0.0, 0.0, 10.0, 5.0));
        assert!(is_point_in_box(9.999, 4.999, 0.0, 0.0, 10.0, 5.0));
        assert!(!is_point_in_box(10.0, 2.0, 0.0, 0.0, 10.0, 5.0));
        assert!(!is_point_in_box(2.0, 5.0, 0.0, 0.0, 10.0, 5.0));
        assert!(!is_point_in_box(-0.001, 2.0, 0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn nan_is_never_inside() {
        assert!(!is_point_in_box(f64::NAN, 1.0, 0.0, 0.0, 10.0, 10.0));
        assert!(!Rect::new(0.0, 0.0, 10.0, 10.0).contains(1.0, f64::NAN));
    }

    #[test]
    fn padding_sums_do_not_overflow() {
        let padding = Padding::new(u32::MAX, 1, u32::MAX, u32::MAX);
        assert_eq!(padding.horizontal(), u64::from(u32::MAX) + 1);
        assert_eq!(padding.vertical(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(100.0, 50.0, 300.0, 200.0);
        assert_eq!(rect.right(), 400.0);
        assert_eq!(rect.bottom(), 250.0);
        assert!(rect.contains(100.0, 50.0));
        assert!(!rect.contains(400.0, 100.0));
        assert_eq!(rect.translate(-100.0, -50.0), Rect::new(0.0, 0.0, 300.0, 200.0));
    }
}
