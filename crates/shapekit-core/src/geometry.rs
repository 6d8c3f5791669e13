//! Fixed-point geometry primitives
//!
//! All shape geometry lives on an integer grid of internal units (IU, one
//! nanometre each), so repeated pull/push cycles never accumulate floating
//! rounding. Intermediate math runs in `i64`/`i128`/`f64` and comes back to
//! the grid through checked rounding.
//!
//! Internal coordinates grow downward on Y. Raw angles from this module are
//! geometric (`atan2(dy, dx)`); editor-facing angle fields flip the sign with
//! [`Angle::editor_sign`].

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::GeometryError;

/// A single fixed-point coordinate.
pub type Coord = i32;

/// Internal units per millimetre.
pub const IU_PER_MM: f64 = 1_000_000.0;

/// Internal units per inch.
pub const IU_PER_INCH: f64 = 25.4 * IU_PER_MM;

/// Largest representable coordinate magnitude, as a float.
pub const COORD_LIMIT: f64 = Coord::MAX as f64;

/// Angles closer to zero than this (in degrees) count as zero.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Round a float onto the grid, or `None` if it leaves the coordinate range.
pub fn checked_coord(value: f64) -> Option<Coord> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= Coord::MIN as f64 && rounded <= COORD_LIMIT {
        Some(rounded as Coord)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Build a point from unrounded coordinates, refusing anything off the grid's range.
    pub fn checked_from_f64(x: f64, y: f64) -> Result<Self, GeometryError> {
        match (checked_coord(x), checked_coord(y)) {
            (Some(cx), Some(cy)) => Ok(Self::new(cx, cy)),
            _ => Err(GeometryError::CoordinateOverflow { x, y }),
        }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (other.x as i64 - self.x as i64) as f64;
        let dy = (other.y as i64 - self.y as i64) as f64;
        dx.hypot(dy)
    }

    /// Midpoint rounded toward negative infinity, so it always fits the grid.
    pub fn midpoint(&self, other: &Point) -> Point {
        let x = (self.x as i64 + other.x as i64).div_euclid(2);
        let y = (self.y as i64 + other.y as i64).div_euclid(2);
        Point::new(x as Coord, y as Coord)
    }

    /// Translate by an integer offset.
    pub fn offset(&self, dx: i64, dy: i64) -> Result<Point, GeometryError> {
        let x = self.x as i64 + dx;
        let y = self.y as i64 + dy;
        Point::checked_from_f64(x as f64, y as f64)
    }

    /// Mirror this point through `mid`, i.e. `2 * mid - self`.
    pub fn reflect_through(&self, mid: &Point) -> Result<Point, GeometryError> {
        let x = 2 * mid.x as i64 - self.x as i64;
        let y = 2 * mid.y as i64 - self.y as i64;
        Point::checked_from_f64(x as f64, y as f64)
    }

    /// Raw geometric direction of the vector from `self` to `other`.
    pub fn angle_to(&self, other: &Point) -> Angle {
        let dx = (other.x as i64 - self.x as i64) as f64;
        let dy = (other.y as i64 - self.y as i64) as f64;
        Angle::from_radians(dy.atan2(dx))
    }

    pub fn to_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Signed angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Map into `(-180, 180]`.
    pub fn normalize_180(self) -> Self {
        let mut a = self.0 % 360.0;
        if a <= -180.0 {
            a += 360.0;
        } else if a > 180.0 {
            a -= 360.0;
        }
        Self(a + 0.0)
    }

    /// Map into `[0, 360)`.
    pub fn normalize_360(self) -> Self {
        let mut a = self.0 % 360.0;
        if a < 0.0 {
            a += 360.0;
        }
        // -1e-15 % 360 + 360 rounds to exactly 360.0
        if a >= 360.0 {
            a -= 360.0;
        }
        Self(a + 0.0)
    }

    /// Convert between geometric and editor sign conventions (the editor's Y axis points up).
    pub fn editor_sign(self) -> Self {
        -self
    }

    pub fn is_zero(self) -> bool {
        self.0.abs() < ANGLE_EPSILON
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// The point `length` units away from `origin` in the geometric direction `angle`.
pub fn polar_offset(origin: &Point, length: f64, angle: Angle) -> Result<Point, GeometryError> {
    let (sin, cos) = angle.radians().sin_cos();
    let (ox, oy) = origin.to_f64();
    Point::checked_from_f64(ox + length * cos, oy + length * sin)
}

/// Rotate `point` about `center` by the geometric angle `angle`.
pub fn rotate_about(point: &Point, center: &Point, angle: Angle) -> Result<Point, GeometryError> {
    let (sin, cos) = angle.radians().sin_cos();
    let dx = (point.x as i64 - center.x as i64) as f64;
    let dy = (point.y as i64 - center.y as i64) as f64;
    let (cx, cy) = center.to_f64();
    Point::checked_from_f64(cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}

/// Center of the circle through three points, unrounded.
///
/// Returns `None` when the points are collinear or two of them coincide.
pub fn circumcenter(a: &Point, b: &Point, c: &Point) -> Option<(f64, f64)> {
    // Work relative to `a` so the squared terms stay small.
    let bx = b.x as i64 - a.x as i64;
    let by = b.y as i64 - a.y as i64;
    let cx = c.x as i64 - a.x as i64;
    let cy = c.y as i64 - a.y as i64;

    let det = 2 * (bx as i128 * cy as i128 - by as i128 * cx as i128);
    if det == 0 {
        return None;
    }

    let (bx, by, cx, cy) = (bx as f64, by as f64, cx as f64, cy as f64);
    let b_sq = bx * bx + by * by;
    let c_sq = cx * cx + cy * cy;
    let det = det as f64;

    let ux = (cy * b_sq - by * c_sq) / det;
    let uy = (bx * c_sq - cx * b_sq) / det;
    Some((a.x as f64 + ux, a.y as f64 + uy))
}

fn angle_around(center: (f64, f64), p: &Point) -> Angle {
    let (px, py) = p.to_f64();
    Angle::from_radians((py - center.1).atan2(px - center.0))
}

/// Signed geometric sweep from `start` to `end` that passes through `mid`.
///
/// Positive sweeps turn in the direction of increasing geometric angle.
/// Coincident start and end describe a full turn.
pub fn arc_sweep(start: &Point, mid: &Point, end: &Point, center: (f64, f64)) -> Angle {
    let a_start = angle_around(center, start);
    let to_end = (angle_around(center, end) - a_start).normalize_360().degrees();
    let to_mid = (angle_around(center, mid) - a_start).normalize_360().degrees();

    if to_end == 0.0 {
        return Angle::from_degrees(360.0);
    }
    if to_mid <= to_end {
        Angle::from_degrees(to_end)
    } else {
        Angle::from_degrees(to_end - 360.0)
    }
}

/// Unrounded point halfway along an arc that starts at `start` and sweeps `sweep` about `center`.
pub fn arc_mid_f64(start: &Point, center: (f64, f64), sweep: Angle) -> (f64, f64) {
    let (sx, sy) = start.to_f64();
    let radius = (sx - center.0).hypot(sy - center.1);
    let half = angle_around(center, start) + Angle::from_degrees(sweep.degrees() / 2.0);
    let (sin, cos) = half.radians().sin_cos();
    (center.0 + radius * cos, center.1 + radius * sin)
}

/// [`arc_mid_f64`] snapped to the grid.
pub fn arc_mid(start: &Point, center: (f64, f64), sweep: Angle) -> Result<Point, GeometryError> {
    let (x, y) = arc_mid_f64(start, center, sweep);
    Point::checked_from_f64(x, y)
}
