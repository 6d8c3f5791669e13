use shapekit_core::{
    arc_mid, arc_mid_f64, arc_sweep, circumcenter, rotate_about, Angle, GeometryError, Point,
};

/// Circular arc.
///
/// `angle` is the signed geometric sweep from `start` to `end` about `center`.
/// Exactly one of `end` and `angle` is authoritative for a given edit; the
/// constructors re-derive the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignArc {
    pub start: Point,
    pub end: Point,
    pub center: Point,
    pub angle: Angle,
}

impl DesignArc {
    /// Arc from its center, start point and sweep; `end` is derived.
    ///
    /// Sweeps beyond a full turn are reduced modulo 360 degrees.
    pub fn from_center(center: Point, start: Point, angle: Angle) -> Result<Self, GeometryError> {
        let angle = if angle.degrees().abs() > 360.0 {
            Angle::from_degrees(angle.degrees() % 360.0)
        } else {
            angle
        };
        let end = rotate_about(&start, &center, angle)?;
        Ok(Self {
            start,
            end,
            center,
            angle,
        })
    }

    /// Arc through three points; `center` and `angle` are derived, `end` is kept as given.
    pub fn through_points(start: Point, mid: Point, end: Point) -> Result<Self, GeometryError> {
        if start == mid || mid == end || start == end {
            return Err(GeometryError::CoincidentArcPoints {
                radius: 0.0,
                angle: 0.0,
            });
        }

        let center = circumcenter(&start, &mid, &end).ok_or(GeometryError::CollinearArcPoints)?;
        let angle = arc_sweep(&start, &mid, &end, center);
        let radius = (start.x as f64 - center.0).hypot(start.y as f64 - center.1);

        let center = Point::checked_from_f64(center.0, center.1).map_err(|_| {
            GeometryError::ArcOutOfRange {
                radius,
                angle: angle.editor_sign().degrees(),
            }
        })?;

        Ok(Self {
            start,
            end,
            center,
            angle,
        })
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.start)
    }

    /// Sweep in the editor's angle convention.
    pub fn editor_angle(&self) -> Angle {
        self.angle.editor_sign()
    }

    /// Unrounded point at the angular midpoint of the sweep.
    pub fn mid_f64(&self) -> (f64, f64) {
        arc_mid_f64(&self.start, self.center.to_f64(), self.angle)
    }

    pub fn mid(&self) -> Result<Point, GeometryError> {
        arc_mid(&self.start, self.center.to_f64(), self.angle)
    }
}
