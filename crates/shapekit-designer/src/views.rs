//! Views and bound fields.
//!
//! A view is one human-facing parameterization of a shape: an ordered group
//! of fields (lengths or angles) that can be pulled from the canonical state
//! and pushed back into it. Each field keeps its numeric value and the text
//! the editing surface shows, so a value the user is typing survives until
//! its own view is pulled again.

use std::fmt;

use shapekit_core::units::{self, format_angle, format_length};
use shapekit_core::FieldError;
use shapekit_settings::EditorConfig;
use smallvec::SmallVec;

use crate::model::ShapeType;

/// Values of one view, in field order.
pub type ViewValues = SmallVec<[f64; 8]>;

/// How a field is formatted and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Length,
    Angle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    StartX,
    StartY,
    EndX,
    EndY,
    CornerX,
    CornerY,
    CenterX,
    CenterY,
    MidX,
    MidY,
    PointX,
    PointY,
    Ctrl1X,
    Ctrl1Y,
    Ctrl2X,
    Ctrl2Y,
    Width,
    Height,
    Length,
    Radius,
    Angle,
}

impl FieldId {
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Angle => FieldKind::Angle,
            _ => FieldKind::Length,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::StartX => "Start X",
            FieldId::StartY => "Start Y",
            FieldId::EndX => "End X",
            FieldId::EndY => "End Y",
            FieldId::CornerX => "Corner X",
            FieldId::CornerY => "Corner Y",
            FieldId::CenterX => "Center X",
            FieldId::CenterY => "Center Y",
            FieldId::MidX => "Mid X",
            FieldId::MidY => "Mid Y",
            FieldId::PointX => "Point X",
            FieldId::PointY => "Point Y",
            FieldId::Ctrl1X => "Control 1 X",
            FieldId::Ctrl1Y => "Control 1 Y",
            FieldId::Ctrl2X => "Control 2 X",
            FieldId::Ctrl2Y => "Control 2 Y",
            FieldId::Width => "Width",
            FieldId::Height => "Height",
            FieldId::Length => "Length",
            FieldId::Radius => "Radius",
            FieldId::Angle => "Angle",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectangleView {
    Corners,
    CornerAndSize,
    CenterAndSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentView {
    Endpoints,
    PolarFromStart,
    StartAndMidpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcView {
    CenterStartAngle,
    StartMidEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleView {
    CenterAndRadius,
    CenterAndPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BezierView {
    Points,
}

/// Identifies one view of one shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Rectangle(RectangleView),
    Segment(SegmentView),
    Arc(ArcView),
    Circle(CircleView),
    Bezier(BezierView),
}

impl ViewId {
    /// Every view of `kind`, in display order.
    pub fn all_for(kind: ShapeType) -> &'static [ViewId] {
        use ViewId as V;
        match kind {
            ShapeType::Rectangle => &[
                V::Rectangle(RectangleView::Corners),
                V::Rectangle(RectangleView::CornerAndSize),
                V::Rectangle(RectangleView::CenterAndSize),
            ],
            ShapeType::Segment => &[
                V::Segment(SegmentView::Endpoints),
                V::Segment(SegmentView::PolarFromStart),
                V::Segment(SegmentView::StartAndMidpoint),
            ],
            ShapeType::Arc => &[
                V::Arc(ArcView::CenterStartAngle),
                V::Arc(ArcView::StartMidEnd),
            ],
            ShapeType::Circle => &[
                V::Circle(CircleView::CenterAndRadius),
                V::Circle(CircleView::CenterAndPoint),
            ],
            ShapeType::Bezier => &[V::Bezier(BezierView::Points)],
        }
    }

    pub fn shape_type(self) -> ShapeType {
        match self {
            ViewId::Rectangle(_) => ShapeType::Rectangle,
            ViewId::Segment(_) => ShapeType::Segment,
            ViewId::Arc(_) => ShapeType::Arc,
            ViewId::Circle(_) => ShapeType::Circle,
            ViewId::Bezier(_) => ShapeType::Bezier,
        }
    }

    /// Fields owned by this view, in value order.
    pub fn fields(self) -> &'static [FieldId] {
        use FieldId::*;
        match self {
            ViewId::Rectangle(RectangleView::Corners) => &[StartX, StartY, EndX, EndY],
            ViewId::Rectangle(RectangleView::CornerAndSize) => &[CornerX, CornerY, Width, Height],
            ViewId::Rectangle(RectangleView::CenterAndSize) => &[CenterX, CenterY, Width, Height],
            ViewId::Segment(SegmentView::Endpoints) => &[StartX, StartY, EndX, EndY],
            ViewId::Segment(SegmentView::PolarFromStart) => &[StartX, StartY, Length, Angle],
            ViewId::Segment(SegmentView::StartAndMidpoint) => &[StartX, StartY, MidX, MidY],
            ViewId::Arc(ArcView::CenterStartAngle) => &[CenterX, CenterY, StartX, StartY, Angle],
            ViewId::Arc(ArcView::StartMidEnd) => &[StartX, StartY, MidX, MidY, EndX, EndY],
            ViewId::Circle(CircleView::CenterAndRadius) => &[CenterX, CenterY, Radius],
            ViewId::Circle(CircleView::CenterAndPoint) => &[CenterX, CenterY, PointX, PointY],
            ViewId::Bezier(BezierView::Points) => {
                &[StartX, StartY, EndX, EndY, Ctrl1X, Ctrl1Y, Ctrl2X, Ctrl2Y]
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewId::Rectangle(RectangleView::Corners) => "Corners",
            ViewId::Rectangle(RectangleView::CornerAndSize) => "Corner and Size",
            ViewId::Rectangle(RectangleView::CenterAndSize) => "Center and Size",
            ViewId::Segment(SegmentView::Endpoints) => "Endpoints",
            ViewId::Segment(SegmentView::PolarFromStart) => "Length and Angle",
            ViewId::Segment(SegmentView::StartAndMidpoint) => "Start and Midpoint",
            ViewId::Arc(ArcView::CenterStartAngle) => "Center, Start and Angle",
            ViewId::Arc(ArcView::StartMidEnd) => "Start, Mid and End",
            ViewId::Circle(CircleView::CenterAndRadius) => "Center and Radius",
            ViewId::Circle(CircleView::CenterAndPoint) => "Center and Point",
            ViewId::Bezier(BezierView::Points) => "Points",
        }
    }

    pub fn field_index(self, field: FieldId) -> Result<usize, FieldError> {
        self.fields()
            .iter()
            .position(|f| *f == field)
            .ok_or(FieldError::NotInView {
                field: field.label(),
                view: self.label(),
            })
    }

    pub(crate) fn check_count(self, values: &[f64]) -> Result<(), FieldError> {
        let expected = self.fields().len();
        if values.len() != expected {
            return Err(FieldError::ValueCount {
                view: self.label(),
                expected,
                actual: values.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shape_type(), self.label())
    }
}

impl From<RectangleView> for ViewId {
    fn from(view: RectangleView) -> Self {
        ViewId::Rectangle(view)
    }
}

impl From<SegmentView> for ViewId {
    fn from(view: SegmentView) -> Self {
        ViewId::Segment(view)
    }
}

impl From<ArcView> for ViewId {
    fn from(view: ArcView) -> Self {
        ViewId::Arc(view)
    }
}

impl From<CircleView> for ViewId {
    fn from(view: CircleView) -> Self {
        ViewId::Circle(view)
    }
}

impl From<BezierView> for ViewId {
    fn from(view: BezierView) -> Self {
        ViewId::Bezier(view)
    }
}

pub(crate) fn format_field(kind: FieldKind, value: f64, config: &EditorConfig) -> String {
    match kind {
        FieldKind::Length => {
            format_length(value, config.measurement_system, config.length_precision)
        }
        FieldKind::Angle => format_angle(value, config.angle_precision),
    }
}

pub(crate) fn parse_field(
    kind: FieldKind,
    text: &str,
    config: &EditorConfig,
) -> Result<f64, FieldError> {
    match kind {
        FieldKind::Length => units::parse_length(text, config.measurement_system),
        FieldKind::Angle => units::parse_angle(text),
    }
}

/// One editable scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundField {
    id: FieldId,
    value: f64,
    text: String,
}

impl BoundField {
    fn new(id: FieldId) -> Self {
        Self {
            id,
            value: 0.0,
            text: String::new(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.id.kind()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text as last typed by the user or written by a pull.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Store raw user text verbatim along with its parsed value.
    pub(crate) fn set_raw(&mut self, text: &str, value: f64) {
        self.text = text.to_string();
        self.value = value;
    }

    /// Store a value, rewriting the text only when it no longer reads as that value.
    pub(crate) fn set_value(&mut self, value: f64, config: &EditorConfig) {
        self.value = value;
        let stale = match parse_field(self.kind(), &self.text, config) {
            Ok(parsed) => self.text.is_empty() || (parsed - value).abs() > 1e-6,
            Err(_) => true,
        };
        if stale {
            self.text = format_field(self.kind(), value, config);
            tracing::trace!(field = %self.id, text = %self.text, "field text refreshed");
        }
    }
}

/// A view's bound fields.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    id: ViewId,
    fields: SmallVec<[BoundField; 8]>,
}

impl View {
    pub fn new(id: ViewId) -> Self {
        Self {
            id,
            fields: id.fields().iter().copied().map(BoundField::new).collect(),
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Result<&BoundField, FieldError> {
        let index = self.id.field_index(id)?;
        Ok(&self.fields[index])
    }

    pub(crate) fn field_mut(&mut self, id: FieldId) -> Result<&mut BoundField, FieldError> {
        let index = self.id.field_index(id)?;
        Ok(&mut self.fields[index])
    }

    pub fn values(&self) -> ViewValues {
        self.fields.iter().map(BoundField::value).collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.text.clone()).collect()
    }

    /// Overwrite every field from `values`; text changes only where the value changed.
    pub(crate) fn set_values(
        &mut self,
        values: &[f64],
        config: &EditorConfig,
    ) -> Result<(), FieldError> {
        self.id.check_count(values)?;
        for (field, value) in self.fields.iter_mut().zip(values) {
            field.set_value(*value, config);
        }
        Ok(())
    }

    /// Pulled values always match the view's field count.
    pub(crate) fn refresh(&mut self, values: &[f64], config: &EditorConfig) {
        debug_assert_eq!(values.len(), self.fields.len(), "{} pull size", self.id);
        for (field, value) in self.fields.iter_mut().zip(values) {
            field.set_value(*value, config);
        }
    }
}

/// The views of one synchronizer, looked up by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSet {
    views: SmallVec<[View; 3]>,
}

impl ViewSet {
    pub fn for_shape(kind: ShapeType) -> Self {
        Self {
            views: ViewId::all_for(kind).iter().copied().map(View::new).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id == id)
    }
}

/// Views to re-pull after an edit: every view of the shape except the edited one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSet {
    edited: ViewId,
    views: SmallVec<[ViewId; 3]>,
}

impl RefreshSet {
    pub fn after_edit(edited: ViewId) -> Self {
        let views = ViewId::all_for(edited.shape_type())
            .iter()
            .copied()
            .filter(|v| *v != edited)
            .collect();
        Self { edited, views }
    }

    pub fn edited(&self) -> ViewId {
        self.edited
    }

    pub fn iter(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views.iter().copied()
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.views.contains(&view)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
