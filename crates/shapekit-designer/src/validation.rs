//! Degenerate-geometry checks run before a session commits.
//!
//! Each function returns every problem it finds for one shape, in the order
//! they are reported to the user. Segments and Béziers have no shape-level
//! checks.

use shapekit_core::{circumcenter, GeometryError};
use shapekit_settings::EditorConfig;

use crate::model::{DesignArc, DesignCircle, DesignRectangle};

pub fn validate_rectangle(rect: &DesignRectangle) -> Vec<GeometryError> {
    let mut errors = Vec::new();
    if rect.start == rect.end {
        errors.push(GeometryError::ZeroSizeRectangle);
    } else if rect.corner_radius < 0 || rect.corner_radius > rect.max_corner_radius() {
        errors.push(GeometryError::CornerRadiusOutOfRange {
            radius: rect.corner_radius,
            max: rect.max_corner_radius(),
        });
    }
    errors
}

pub fn validate_circle(circle: &DesignCircle) -> Vec<GeometryError> {
    let radius = circle.radius();
    if radius <= 0 {
        vec![GeometryError::NonPositiveRadius { radius }]
    } else {
        Vec::new()
    }
}

/// Arc checks stop at the first failure; later checks depend on earlier ones passing.
pub fn validate_arc(arc: &DesignArc, config: &EditorConfig) -> Vec<GeometryError> {
    let radius = arc.radius();
    let angle = arc.editor_angle().degrees();
    let out_of_range = GeometryError::ArcOutOfRange { radius, angle };

    if arc.angle.is_zero() {
        return vec![GeometryError::ZeroArcAngle];
    }

    let mid = match arc.mid() {
        Ok(mid) => mid,
        Err(_) => return vec![out_of_range],
    };

    if arc.start == mid || mid == arc.end || arc.start == arc.end {
        return vec![GeometryError::CoincidentArcPoints { radius, angle }];
    }

    // Three-point pushes snap the center to the grid, which can land it on an endpoint.
    if arc.center == arc.start || arc.center == arc.end {
        return vec![out_of_range];
    }

    let Some((cx, cy)) = circumcenter(&arc.start, &mid, &arc.end) else {
        return vec![out_of_range];
    };
    let r = (arc.start.x as f64 - cx).hypot(arc.start.y as f64 - cy);
    if (cx.abs() + r).max(cy.abs() + r) >= config.arc_range_limit() {
        return vec![out_of_range];
    }

    let center = (cx.round(), cy.round());
    if center == arc.start.to_f64() || center == arc.end.to_f64() {
        return vec![out_of_range];
    }

    Vec::new()
}
