use shapekit_core::{polar_offset, Angle, GeometryError};
use shapekit_settings::EditorConfig;

use super::{extend_point, point_at, Parameterization};
use crate::model::{DesignSegment, ShapeType};
use crate::views::{SegmentView, ViewValues};

impl Parameterization for DesignSegment {
    const SHAPE_TYPE: ShapeType = ShapeType::Segment;

    type View = SegmentView;

    const VIEWS: &'static [SegmentView] = &[
        SegmentView::Endpoints,
        SegmentView::PolarFromStart,
        SegmentView::StartAndMidpoint,
    ];

    fn push_fields(&self, view: SegmentView, values: &[f64]) -> Result<Self, GeometryError> {
        let start = point_at(values, 0)?;
        let end = match view {
            SegmentView::Endpoints => point_at(values, 2)?,
            SegmentView::PolarFromStart => {
                let angle = Angle::from_degrees(values[3]).editor_sign();
                polar_offset(&start, values[2], angle)?
            }
            SegmentView::StartAndMidpoint => start.reflect_through(&point_at(values, 2)?)?,
        };
        Ok(Self { start, end })
    }

    fn pull(&self, view: SegmentView) -> ViewValues {
        let mut values = ViewValues::new();
        extend_point(&mut values, self.start);
        match view {
            SegmentView::Endpoints => extend_point(&mut values, self.end),
            SegmentView::PolarFromStart => {
                values.push(self.length().round());
                values.push(self.editor_angle().degrees());
            }
            SegmentView::StartAndMidpoint => extend_point(&mut values, self.midpoint()),
        }
        values
    }

    fn validate(&self, _config: &EditorConfig) -> Vec<GeometryError> {
        Vec::new()
    }
}
