use shapekit_core::Point;

/// Axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignRectangle {
    pub start: Point,
    pub end: Point,
    /// Corner rounding radius in internal units; zero for sharp corners.
    pub corner_radius: i64,
}

impl DesignRectangle {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            corner_radius: 0,
        }
    }

    pub fn with_corner_radius(mut self, radius: i64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn width(&self) -> i64 {
        (self.end.x as i64 - self.start.x as i64).abs()
    }

    pub fn height(&self) -> i64 {
        (self.end.y as i64 - self.start.y as i64).abs()
    }

    /// Corner with the smaller coordinate on each axis.
    pub fn min_corner(&self) -> Point {
        Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    /// Same rectangle with `start` at the min corner and `end` at the max corner.
    pub fn normalized(&self) -> Self {
        Self {
            start: self.min_corner(),
            end: Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
            corner_radius: self.corner_radius,
        }
    }

    pub fn center(&self) -> Point {
        self.start.midpoint(&self.end)
    }

    /// Largest corner radius that still fits: half of the shorter side.
    pub fn max_corner_radius(&self) -> i64 {
        self.width().min(self.height()) / 2
    }
}
