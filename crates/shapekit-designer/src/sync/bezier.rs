use shapekit_core::GeometryError;
use shapekit_settings::EditorConfig;

use super::{extend_point, point_at, Parameterization};
use crate::model::{DesignBezier, ShapeType};
use crate::views::{BezierView, ViewValues};

impl Parameterization for DesignBezier {
    const SHAPE_TYPE: ShapeType = ShapeType::Bezier;

    type View = BezierView;

    const VIEWS: &'static [BezierView] = &[BezierView::Points];

    fn push_fields(&self, _view: BezierView, values: &[f64]) -> Result<Self, GeometryError> {
        Ok(Self {
            start: point_at(values, 0)?,
            end: point_at(values, 2)?,
            ctrl1: point_at(values, 4)?,
            ctrl2: point_at(values, 6)?,
        })
    }

    fn pull(&self, _view: BezierView) -> ViewValues {
        let mut values = ViewValues::new();
        for point in [self.start, self.end, self.ctrl1, self.ctrl2] {
            extend_point(&mut values, point);
        }
        values
    }

    fn validate(&self, _config: &EditorConfig) -> Vec<GeometryError> {
        Vec::new()
    }
}
