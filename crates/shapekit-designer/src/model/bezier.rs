use shapekit_core::Point;

/// Cubic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignBezier {
    pub start: Point,
    pub end: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
}

impl DesignBezier {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self {
            start,
            end,
            ctrl1,
            ctrl2,
        }
    }
}
