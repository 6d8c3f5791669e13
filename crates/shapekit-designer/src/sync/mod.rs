//! Per-kind synchronizers.
//!
//! A synchronizer owns one shape's canonical state together with all of that
//! kind's views. `push` writes a view's field values into the canonical
//! state, `pull` refreshes a view from it, and `validate` reports degenerate
//! geometry. The canonical struct is only borrowed for the duration of a
//! single push or pull.

mod arc;
mod bezier;
mod circle;
mod rectangle;
mod segment;

use shapekit_core::{checked_coord, GeometryError, Point, SessionError};
use shapekit_settings::EditorConfig;

use crate::model::{
    DesignArc, DesignBezier, DesignCircle, DesignRectangle, DesignSegment, Shape, ShapeType,
};
use crate::views::{View, ViewId, ViewSet, ViewValues};

/// The push/pull/validate contract every shape kind implements.
pub trait Parameterization: Copy + Into<Shape> {
    const SHAPE_TYPE: ShapeType;

    type View: Copy + Into<ViewId> + 'static;

    /// Every view of this kind, in display order.
    const VIEWS: &'static [Self::View];

    /// Shape described by `values` for `view`; `self` supplies anything the view does not cover.
    ///
    /// `values` must hold exactly one value per field of `view`.
    fn push(&self, view: Self::View, values: &[f64]) -> Result<Self, SessionError> {
        let id: ViewId = view.into();
        id.check_count(values)?;
        Ok(self.push_fields(view, values)?)
    }

    /// [`push`](Self::push) after the value count has been checked.
    fn push_fields(&self, view: Self::View, values: &[f64]) -> Result<Self, GeometryError>;

    /// Field values of `view` for this shape.
    fn pull(&self, view: Self::View) -> ViewValues;

    /// Kind-specific degeneracy and range checks, in report order.
    fn validate(&self, config: &EditorConfig) -> Vec<GeometryError>;
}

/// Canonical state and views for one shape kind.
#[derive(Debug, Clone)]
pub struct KindSynchronizer<S: Parameterization> {
    shape: S,
    views: ViewSet,
}

impl<S: Parameterization> KindSynchronizer<S> {
    /// Bind to `shape` and pull every view once.
    pub fn new(shape: S, config: &EditorConfig) -> Self {
        let mut sync = Self {
            shape,
            views: ViewSet::for_shape(S::SHAPE_TYPE),
        };
        for view in S::VIEWS {
            sync.pull(*view, config);
        }
        sync
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    /// Apply `view`'s current field values to the canonical state.
    ///
    /// Nothing changes when the push fails.
    pub fn push(&mut self, view: S::View) -> Result<(), SessionError> {
        let id: ViewId = view.into();
        let values = self.views.get(id).map(View::values).unwrap_or_default();
        self.shape = self.shape.push(view, &values)?;
        Ok(())
    }

    pub fn pull(&mut self, view: S::View, config: &EditorConfig) {
        let values = self.shape.pull(view);
        if let Some(target) = self.views.get_mut(view.into()) {
            target.refresh(&values, config);
        }
    }

    pub fn validate(&self, config: &EditorConfig) -> Vec<GeometryError> {
        self.shape.validate(config)
    }

    fn shape_mut(&mut self) -> &mut S {
        &mut self.shape
    }
}

/// One synchronizer per shape kind.
#[derive(Debug, Clone)]
pub enum Synchronizer {
    Rectangle(KindSynchronizer<DesignRectangle>),
    Segment(KindSynchronizer<DesignSegment>),
    Arc(KindSynchronizer<DesignArc>),
    Circle(KindSynchronizer<DesignCircle>),
    Bezier(KindSynchronizer<DesignBezier>),
}

impl Synchronizer {
    pub fn new(shape: Shape, config: &EditorConfig) -> Self {
        match shape {
            Shape::Rectangle(s) => Synchronizer::Rectangle(KindSynchronizer::new(s, config)),
            Shape::Segment(s) => Synchronizer::Segment(KindSynchronizer::new(s, config)),
            Shape::Arc(s) => Synchronizer::Arc(KindSynchronizer::new(s, config)),
            Shape::Circle(s) => Synchronizer::Circle(KindSynchronizer::new(s, config)),
            Shape::Bezier(s) => Synchronizer::Bezier(KindSynchronizer::new(s, config)),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Synchronizer::Rectangle(_) => ShapeType::Rectangle,
            Synchronizer::Segment(_) => ShapeType::Segment,
            Synchronizer::Arc(_) => ShapeType::Arc,
            Synchronizer::Circle(_) => ShapeType::Circle,
            Synchronizer::Bezier(_) => ShapeType::Bezier,
        }
    }

    /// Current canonical state.
    pub fn shape(&self) -> Shape {
        match self {
            Synchronizer::Rectangle(s) => (*s.shape()).into(),
            Synchronizer::Segment(s) => (*s.shape()).into(),
            Synchronizer::Arc(s) => (*s.shape()).into(),
            Synchronizer::Circle(s) => (*s.shape()).into(),
            Synchronizer::Bezier(s) => (*s.shape()).into(),
        }
    }

    pub fn views(&self) -> &ViewSet {
        match self {
            Synchronizer::Rectangle(s) => s.views(),
            Synchronizer::Segment(s) => s.views(),
            Synchronizer::Arc(s) => s.views(),
            Synchronizer::Circle(s) => s.views(),
            Synchronizer::Bezier(s) => s.views(),
        }
    }

    fn mismatch(&self, view: ViewId) -> SessionError {
        SessionError::ViewKindMismatch {
            view: view.label(),
            kind: self.shape_type().label(),
        }
    }

    pub fn view(&self, id: ViewId) -> Result<&View, SessionError> {
        self.views().get(id).ok_or_else(|| self.mismatch(id))
    }

    pub(crate) fn view_mut(&mut self, id: ViewId) -> Result<&mut View, SessionError> {
        let err = self.mismatch(id);
        let views = match self {
            Synchronizer::Rectangle(s) => &mut s.views,
            Synchronizer::Segment(s) => &mut s.views,
            Synchronizer::Arc(s) => &mut s.views,
            Synchronizer::Circle(s) => &mut s.views,
            Synchronizer::Bezier(s) => &mut s.views,
        };
        views.get_mut(id).ok_or(err)
    }

    pub fn push(&mut self, view: ViewId) -> Result<(), SessionError> {
        match (self, view) {
            (Synchronizer::Rectangle(s), ViewId::Rectangle(v)) => s.push(v),
            (Synchronizer::Segment(s), ViewId::Segment(v)) => s.push(v),
            (Synchronizer::Arc(s), ViewId::Arc(v)) => s.push(v),
            (Synchronizer::Circle(s), ViewId::Circle(v)) => s.push(v),
            (Synchronizer::Bezier(s), ViewId::Bezier(v)) => s.push(v),
            (sync, view) => Err(sync.mismatch(view)),
        }
    }

    pub fn pull(&mut self, view: ViewId, config: &EditorConfig) -> Result<(), SessionError> {
        match (self, view) {
            (Synchronizer::Rectangle(s), ViewId::Rectangle(v)) => s.pull(v, config),
            (Synchronizer::Segment(s), ViewId::Segment(v)) => s.pull(v, config),
            (Synchronizer::Arc(s), ViewId::Arc(v)) => s.pull(v, config),
            (Synchronizer::Circle(s), ViewId::Circle(v)) => s.pull(v, config),
            (Synchronizer::Bezier(s), ViewId::Bezier(v)) => s.pull(v, config),
            (sync, view) => return Err(sync.mismatch(view)),
        }
        Ok(())
    }

    pub fn validate(&self, config: &EditorConfig) -> Vec<GeometryError> {
        match self {
            Synchronizer::Rectangle(s) => s.validate(config),
            Synchronizer::Segment(s) => s.validate(config),
            Synchronizer::Arc(s) => s.validate(config),
            Synchronizer::Circle(s) => s.validate(config),
            Synchronizer::Bezier(s) => s.validate(config),
        }
    }

    /// Set a rectangle's corner radius; other kinds have none.
    pub fn set_corner_radius(&mut self, radius: i64) -> Result<(), SessionError> {
        match self {
            Synchronizer::Rectangle(s) => {
                s.shape_mut().corner_radius = radius;
                Ok(())
            }
            other => Err(SessionError::ViewKindMismatch {
                view: "Corner Radius",
                kind: other.shape_type().label(),
            }),
        }
    }
}

/// Two consecutive values as a grid point.
pub(crate) fn point_at(values: &[f64], index: usize) -> Result<Point, GeometryError> {
    Point::checked_from_f64(values[index], values[index + 1])
}

/// A length value rounded to whole internal units.
pub(crate) fn length_at(values: &[f64], index: usize) -> Result<i64, GeometryError> {
    let value = values[index];
    // Lengths span at most the full coordinate range twice over.
    if checked_coord(value / 2.0).is_none() {
        return Err(GeometryError::CoordinateOverflow { x: value, y: 0.0 });
    }
    Ok(value.round() as i64)
}

pub(crate) fn extend_point(values: &mut ViewValues, point: Point) {
    values.push(point.x as f64);
    values.push(point.y as f64);
}
