use shapekit_core::GeometryError;
use shapekit_settings::EditorConfig;

use super::{extend_point, length_at, point_at, Parameterization};
use crate::model::{DesignRectangle, ShapeType};
use crate::validation;
use crate::views::{RectangleView, ViewValues};

impl Parameterization for DesignRectangle {
    const SHAPE_TYPE: ShapeType = ShapeType::Rectangle;

    type View = RectangleView;

    const VIEWS: &'static [RectangleView] = &[
        RectangleView::Corners,
        RectangleView::CornerAndSize,
        RectangleView::CenterAndSize,
    ];

    fn push_fields(&self, view: RectangleView, values: &[f64]) -> Result<Self, GeometryError> {
        let (start, end) = match view {
            RectangleView::Corners => (point_at(values, 0)?, point_at(values, 2)?),
            RectangleView::CornerAndSize => {
                let corner = point_at(values, 0)?;
                let (w, h) = (length_at(values, 2)?, length_at(values, 3)?);
                (corner, corner.offset(w, h)?)
            }
            RectangleView::CenterAndSize => {
                let center = point_at(values, 0)?;
                let (w, h) = (length_at(values, 2)?, length_at(values, 3)?);
                // Odd sizes put the extra unit on the far side so the center reads back unchanged.
                let start = center.offset(-w.div_euclid(2), -h.div_euclid(2))?;
                (start, start.offset(w, h)?)
            }
        };
        Ok(Self {
            start,
            end,
            corner_radius: self.corner_radius,
        })
    }

    fn pull(&self, view: RectangleView) -> ViewValues {
        let mut values = ViewValues::new();
        match view {
            RectangleView::Corners => {
                extend_point(&mut values, self.start);
                extend_point(&mut values, self.end);
            }
            RectangleView::CornerAndSize => {
                extend_point(&mut values, self.min_corner());
                values.push(self.width() as f64);
                values.push(self.height() as f64);
            }
            RectangleView::CenterAndSize => {
                extend_point(&mut values, self.center());
                values.push(self.width() as f64);
                values.push(self.height() as f64);
            }
        }
        values
    }

    fn validate(&self, _config: &EditorConfig) -> Vec<GeometryError> {
        validation::validate_rectangle(self)
    }
}
