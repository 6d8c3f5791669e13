//! # ShapeKit Designer
//!
//! Multi-view shape editing for a 2D design tool.
//!
//! Every shape kind has one canonical representation ([`model`]) and several
//! human-facing parameterizations of it ([`views`]). A [`Synchronizer`] keeps
//! them consistent: editing one view pushes it into the canonical state and
//! pulls every other view back out. An [`EditingSession`] wraps a
//! synchronizer around a working copy and only writes the caller's shape on
//! a commit that passes [`validation`].
//!
//! ```
//! use shapekit_core::Point;
//! use shapekit_designer::{DesignRectangle, EditingSession, RectangleView, Shape, ViewId};
//!
//! let mut shape: Shape = DesignRectangle::new(Point::new(0, 0), Point::new(10, 10)).into();
//! let mut session = EditingSession::new(&mut shape);
//! session
//!     .apply_edit(ViewId::Rectangle(RectangleView::Corners), &[10.0, 10.0, 110.0, 60.0])
//!     .unwrap();
//! let center = session
//!     .field_values(ViewId::Rectangle(RectangleView::CenterAndSize))
//!     .unwrap();
//! assert_eq!(center.as_slice(), &[60.0, 35.0, 100.0, 50.0]);
//! session.request_commit().unwrap();
//! ```

pub mod model;
pub mod session;
pub mod sync;
pub mod validation;
pub mod views;

pub use model::{
    DesignArc, DesignBezier, DesignCircle, DesignRectangle, DesignSegment, Shape, ShapeType,
};
pub use session::{CloseReason, EditEvent, EditOutcome, EditingSession, SessionState};
pub use sync::{KindSynchronizer, Parameterization, Synchronizer};
pub use views::{
    ArcView, BezierView, BoundField, CircleView, FieldId, FieldKind, RectangleView, RefreshSet,
    SegmentView, View, ViewId, ViewSet, ViewValues,
};
