use shapekit_core::{GeometryError, Point};

/// Circle given by its center and one point on the circumference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignCircle {
    pub center: Point,
    pub point: Point,
}

impl DesignCircle {
    pub fn new(center: Point, point: Point) -> Self {
        Self { center, point }
    }

    /// Circle whose defining point lies `radius` units to the right of the center.
    pub fn with_radius(center: Point, radius: i64) -> Result<Self, GeometryError> {
        let point = center.offset(radius, 0)?;
        Ok(Self { center, point })
    }

    /// Radius rounded to whole internal units.
    pub fn radius(&self) -> i64 {
        self.center.distance_to(&self.point).round() as i64
    }
}
