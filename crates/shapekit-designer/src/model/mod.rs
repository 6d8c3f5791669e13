//! Canonical shape state.
//!
//! Each shape kind has one authoritative geometric representation. The
//! editing views in [`crate::views`] are derived from it and written back
//! into it; nothing else about a shape is stored.

use std::fmt;

mod arc;
mod bezier;
mod circle;
mod rectangle;
mod segment;

pub use arc::DesignArc;
pub use bezier::DesignBezier;
pub use circle::DesignCircle;
pub use rectangle::DesignRectangle;
pub use segment::DesignSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Rectangle,
    Segment,
    Arc,
    Circle,
    Bezier,
}

impl ShapeType {
    pub const ALL: [ShapeType; 5] = [
        ShapeType::Rectangle,
        ShapeType::Segment,
        ShapeType::Arc,
        ShapeType::Circle,
        ShapeType::Bezier,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Segment => "segment",
            ShapeType::Arc => "arc",
            ShapeType::Circle => "circle",
            ShapeType::Bezier => "bezier",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical state of one shape, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Segment(DesignSegment),
    Arc(DesignArc),
    Circle(DesignCircle),
    Bezier(DesignBezier),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Segment(_) => ShapeType::Segment,
            Shape::Arc(_) => ShapeType::Arc,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Bezier(_) => ShapeType::Bezier,
        }
    }
}

impl From<DesignRectangle> for Shape {
    fn from(shape: DesignRectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<DesignSegment> for Shape {
    fn from(shape: DesignSegment) -> Self {
        Shape::Segment(shape)
    }
}

impl From<DesignArc> for Shape {
    fn from(shape: DesignArc) -> Self {
        Shape::Arc(shape)
    }
}

impl From<DesignCircle> for Shape {
    fn from(shape: DesignCircle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<DesignBezier> for Shape {
    fn from(shape: DesignBezier) -> Self {
        Shape::Bezier(shape)
    }
}
