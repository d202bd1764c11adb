/// A 2D point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Axis-aligned rectangle defined by its top-left corner and size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle. Negative sizes are clamped to zero.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn from_min_size(min: Point, size: [f32; 2]) -> Self {
        Self::new(min.x, min.y, size[0], size[1])
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside this rectangle (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Center a box of `size` inside this rectangle.
    pub fn center_box(&self, size: [f32; 2]) -> Rect {
        Rect {
            x: self.x + (self.width - size[0]) / 2.0,
            y: self.y + (self.height - size[1]) / 2.0,
            width: size[0],
            height: size[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(30.0, 30.0)));
        assert!(rect.contains(Point::new(20.0, 15.0)));
        assert!(!rect.contains(Point::new(30.1, 15.0)));
        assert!(!rect.contains(Point::new(15.0, 9.9)));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let rect = Rect::new(0.0, 0.0, -5.0, 3.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 3.0);
    }

    #[test]
    fn test_center_box() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = outer.center_box([20.0, 10.0]);
        assert_eq!(inner, Rect::new(40.0, 20.0, 20.0, 10.0));
    }
}
