use shapekit_core::{Angle, GeometryError};
use shapekit_settings::EditorConfig;

use super::{extend_point, point_at, Parameterization};
use crate::model::{DesignArc, ShapeType};
use crate::validation;
use crate::views::{ArcView, ViewValues};

impl Parameterization for DesignArc {
    const SHAPE_TYPE: ShapeType = ShapeType::Arc;

    type View = ArcView;

    const VIEWS: &'static [ArcView] = &[ArcView::CenterStartAngle, ArcView::StartMidEnd];

    fn push_fields(&self, view: ArcView, values: &[f64]) -> Result<Self, GeometryError> {
        match view {
            ArcView::CenterStartAngle => {
                let center = point_at(values, 0)?;
                let start = point_at(values, 2)?;
                let angle = Angle::from_degrees(values[4]).editor_sign();
                DesignArc::from_center(center, start, angle)
            }
            ArcView::StartMidEnd => DesignArc::through_points(
                point_at(values, 0)?,
                point_at(values, 2)?,
                point_at(values, 4)?,
            ),
        }
    }

    fn pull(&self, view: ArcView) -> ViewValues {
        let mut values = ViewValues::new();
        match view {
            ArcView::CenterStartAngle => {
                extend_point(&mut values, self.center);
                extend_point(&mut values, self.start);
                values.push(self.editor_angle().degrees());
            }
            ArcView::StartMidEnd => {
                let (mx, my) = self.mid_f64();
                extend_point(&mut values, self.start);
                values.push(mx.round());
                values.push(my.round());
                extend_point(&mut values, self.end);
            }
        }
        values
    }

    fn validate(&self, config: &EditorConfig) -> Vec<GeometryError> {
        validation::validate_arc(self, config)
    }
}
