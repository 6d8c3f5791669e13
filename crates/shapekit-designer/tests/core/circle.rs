use shapekit_core::{GeometryError, Point};
use shapekit_designer::{CircleView, DesignCircle, EditingSession, FieldId, Shape, ViewId};

const RADIUS: ViewId = ViewId::Circle(CircleView::CenterAndRadius);
const POINT: ViewId = ViewId::Circle(CircleView::CenterAndPoint);

fn circle() -> Shape {
    DesignCircle::new(Point::new(0, 0), Point::new(10, 0)).into()
}

#[test]
fn test_radius_edit_refreshes_point_view() {
    let mut shape = circle();
    let mut session = EditingSession::new(&mut shape);
    session.set_field(RADIUS, FieldId::Radius, 25.0).unwrap();
    assert_eq!(
        session.field_values(POINT).unwrap().as_slice(),
        &[0.0, 0.0, 25.0, 0.0]
    );
}

#[test]
fn test_point_edit_refreshes_radius() {
    let mut shape = circle();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(POINT, &[10.0, 10.0, 13.0, 14.0]).unwrap();
    assert_eq!(
        session.field_values(RADIUS).unwrap().as_slice(),
        &[10.0, 10.0, 5.0]
    );
}

#[test]
fn test_zero_radius_is_refused() {
    let mut shape = circle();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(RADIUS, &[0.0, 0.0, 0.0]).unwrap();
    assert_eq!(
        session.validate(),
        vec![GeometryError::NonPositiveRadius { radius: 0 }]
    );
    assert!(session.request_commit().is_err());
    assert!(session.is_open());
}
