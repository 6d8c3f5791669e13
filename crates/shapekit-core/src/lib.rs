//! # ShapeKit Core
//!
//! Core types and utilities for ShapeKit.
//! Provides fixed-point geometry, field text conversion, and the error
//! taxonomy shared by the settings and designer crates.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, FieldError, GeometryError, Result, SessionError};
pub use geometry::{
    arc_mid, arc_mid_f64, arc_sweep, checked_coord, circumcenter, polar_offset, rotate_about,
    Angle, Coord, Point, ANGLE_EPSILON, COORD_LIMIT, IU_PER_INCH, IU_PER_MM,
};
pub use units::MeasurementSystem;
