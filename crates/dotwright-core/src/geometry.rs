//! Geometric values used by positional attributes.

use std::fmt;

/// A two dimensional point, as used by `pos`, `lp`, `margin` and friends.
///
/// Points render as `x,y`, the form DOT expects inside a quoted value.
///
/// # Examples
///
/// ```
/// use dotwright_core::geometry::Point;
///
/// let point = Point::new(1.5, 2.0);
/// assert_eq!(point.to_string(), "1.5,2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point::new(3.25, -1.0);

        assert_approx_eq!(f64, point.x(), 3.25);
        assert_approx_eq!(f64, point.y(), -1.0);
    }

    #[test]
    fn test_point_with_coordinates() {
        let point = Point::default().with_x(4.0).with_y(0.5);

        assert_approx_eq!(f64, point.x(), 4.0);
        assert_approx_eq!(f64, point.y(), 0.5);
    }

    #[test]
    fn test_point_from_tuple() {
        let point: Point = (1.0, 2.0).into();
        assert_eq!(point, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.0, 2.0).to_string(), "1,2");
        assert_eq!(Point::new(0.5, -3.75).to_string(), "0.5,-3.75");
    }
}
