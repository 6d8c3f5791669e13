use shapekit_core::{Angle, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignSegment {
    pub start: Point,
    pub end: Point,
}

impl DesignSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction from start to end in the editor's angle convention, in `(-180, 180]`.
    pub fn editor_angle(&self) -> Angle {
        self.start.angle_to(&self.end).editor_sign().normalize_180()
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}
