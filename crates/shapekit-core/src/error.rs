//! Error handling for ShapeKit
//!
//! Provides the error types used across the editing engine:
//! - Geometry errors (degenerate shapes, numeric range overflow)
//! - Field errors (text that does not parse, values routed to the wrong view)
//! - Session errors (editing after close, failed commits)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! None of them are fatal: every one leaves the working copy editable.

use thiserror::Error;

/// Geometry error type
///
/// Raised by `validate()` and by pushes whose result cannot be represented.
/// The display text is the human-readable message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Both rectangle corners coincide
    #[error("Rectangle cannot be zero-sized.")]
    ZeroSizeRectangle,

    /// Corner radius is negative or does not fit the rectangle
    #[error("Corner radius {radius} must be between 0 and {max}.")]
    CornerRadiusOutOfRange {
        /// The requested corner radius.
        radius: i64,
        /// Half of the shorter rectangle side.
        max: i64,
    },

    /// Arc sweeps no angle
    #[error("Arc angle cannot be zero.")]
    ZeroArcAngle,

    /// Two of the arc's start, mid and end points coincide
    #[error("Invalid arc with radius {radius:.1} and angle {angle:.1}: start, mid and end points must be distinct.")]
    CoincidentArcPoints {
        /// The arc radius at the time of the check.
        radius: f64,
        /// The included angle in degrees.
        angle: f64,
    },

    /// Arc center or radius falls outside the coordinate range
    #[error("Invalid arc with radius {radius:.1} and angle {angle:.1}: the arc exceeds the representable coordinate range.")]
    ArcOutOfRange {
        /// The computed radius.
        radius: f64,
        /// The included angle in degrees.
        angle: f64,
    },

    /// No circle passes through the three given points
    #[error("Start, mid and end points are collinear; no arc passes through them.")]
    CollinearArcPoints,

    /// Circle radius is zero or negative
    #[error("Radius must be greater than zero (got {radius}).")]
    NonPositiveRadius {
        /// The offending radius.
        radius: i64,
    },

    /// A derived coordinate does not fit the fixed-point range
    #[error("Coordinate ({x:.0}, {y:.0}) is outside the representable range.")]
    CoordinateOverflow {
        /// The unrounded X value.
        x: f64,
        /// The unrounded Y value.
        y: f64,
    },
}

/// Field error type
///
/// Represents problems with values handed to a view, before any geometry
/// is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Field text is not a number in the active unit system
    #[error("Cannot parse '{text}': {reason}")]
    Parse {
        /// The raw text as typed.
        text: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Wrong number of values for a view
    #[error("View '{view}' takes {expected} values, got {actual}")]
    ValueCount {
        /// The view label.
        view: &'static str,
        /// Number of fields the view owns.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Field does not belong to the view it was routed to
    #[error("Field '{field}' is not part of view '{view}'")]
    NotInView {
        /// The field label.
        field: &'static str,
        /// The view label.
        view: &'static str,
    },
}

/// Session error type
///
/// Represents misuse of an editing session and refused commits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The session was already committed or cancelled
    #[error("Editing session is closed")]
    Closed,

    /// Validation refused the commit
    #[error("Validation failed: {}", join_messages(.0))]
    ValidationFailed(Vec<GeometryError>),

    /// The view belongs to a different shape kind
    #[error("View '{view}' does not apply to a {kind}")]
    ViewKindMismatch {
        /// The view label.
        view: &'static str,
        /// The shape kind of the session.
        kind: &'static str,
    },

    /// Field error
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Geometry error raised while applying an edit
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl SessionError {
    /// Human-readable messages, one per problem, in report order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            SessionError::ValidationFailed(errors) => {
                errors.iter().map(ToString::to_string).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

fn join_messages(errors: &[GeometryError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main error type for ShapeKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Field error
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a field error
    pub fn is_field_error(&self) -> bool {
        matches!(self, Error::Field(_))
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
