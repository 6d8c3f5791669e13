use shapekit_core::GeometryError;
use shapekit_settings::EditorConfig;

use super::{extend_point, length_at, point_at, Parameterization};
use crate::model::{DesignCircle, ShapeType};
use crate::validation;
use crate::views::{CircleView, ViewValues};

impl Parameterization for DesignCircle {
    const SHAPE_TYPE: ShapeType = ShapeType::Circle;

    type View = CircleView;

    const VIEWS: &'static [CircleView] = &[CircleView::CenterAndRadius, CircleView::CenterAndPoint];

    fn push_fields(&self, view: CircleView, values: &[f64]) -> Result<Self, GeometryError> {
        let center = point_at(values, 0)?;
        match view {
            CircleView::CenterAndRadius => {
                let radius = length_at(values, 2)?;
                if radius < 0 {
                    return Err(GeometryError::NonPositiveRadius { radius });
                }
                DesignCircle::with_radius(center, radius)
            }
            CircleView::CenterAndPoint => Ok(DesignCircle::new(center, point_at(values, 2)?)),
        }
    }

    fn pull(&self, view: CircleView) -> ViewValues {
        let mut values = ViewValues::new();
        extend_point(&mut values, self.center);
        match view {
            CircleView::CenterAndRadius => values.push(self.radius() as f64),
            CircleView::CenterAndPoint => extend_point(&mut values, self.point),
        }
        values
    }

    fn validate(&self, _config: &EditorConfig) -> Vec<GeometryError> {
        validation::validate_circle(self)
    }
}
