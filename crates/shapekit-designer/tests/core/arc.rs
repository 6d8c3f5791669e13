use shapekit_core::{Angle, GeometryError, Point};
use shapekit_designer::{ArcView, DesignArc, EditingSession, Shape, ViewId};

const CENTER_START: ViewId = ViewId::Arc(ArcView::CenterStartAngle);
const THREE_POINT: ViewId = ViewId::Arc(ArcView::StartMidEnd);

fn quarter_arc() -> Shape {
    DesignArc::from_center(Point::new(0, 0), Point::new(100, 0), Angle::from_degrees(-90.0))
        .map(Shape::from)
        .unwrap()
}

#[test]
fn test_three_point_reconstruction() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    session
        .apply_edit(THREE_POINT, &[0.0, 0.0, 50.0, 50.0, 100.0, 0.0])
        .unwrap();

    let csa = session.field_values(CENTER_START).unwrap();
    let center = (csa[0], csa[1]);
    let dist = |x: f64, y: f64| (x - center.0).hypot(y - center.1);
    assert!((dist(0.0, 0.0) - dist(50.0, 50.0)).abs() < 1e-9);
    assert!((dist(0.0, 0.0) - dist(100.0, 0.0)).abs() < 1e-9);

    // Pull the edited view back and compare with what was typed.
    session.pull_all().unwrap();
    assert_eq!(
        session.field_values(THREE_POINT).unwrap().as_slice(),
        &[0.0, 0.0, 50.0, 50.0, 100.0, 0.0]
    );
    assert!(session.validate().is_empty());
}

#[test]
fn test_center_start_angle_drives_end() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    session
        .apply_edit(CENTER_START, &[0.0, 0.0, 0.0, -100.0, 180.0])
        .unwrap();
    let sme = session.field_values(THREE_POINT).unwrap();
    assert_eq!(&sme[4..], &[0.0, 100.0]);
    assert_eq!(&sme[2..4], &[-100.0, 0.0]);
}

#[test]
fn test_zero_angle_is_refused() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    session
        .apply_edit(CENTER_START, &[0.0, 0.0, 100.0, 0.0, 0.0])
        .unwrap();
    assert_eq!(session.validate(), vec![GeometryError::ZeroArcAngle]);
    assert!(session.request_commit().is_err());
}

#[test]
fn test_collinear_points_are_refused() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    let before = session.preview();
    assert!(session
        .apply_edit(THREE_POINT, &[0.0, 0.0, 10.0, 10.0, 20.0, 20.0])
        .is_err());
    assert_eq!(session.preview(), before);
    assert_eq!(session.validate(), vec![GeometryError::CollinearArcPoints]);
}

#[test]
fn test_coincident_points_are_refused() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    assert!(session
        .apply_edit(THREE_POINT, &[0.0, 0.0, 0.0, 0.0, 20.0, 20.0])
        .is_err());
    assert!(matches!(
        session.validate()[..],
        [GeometryError::CoincidentArcPoints { .. }]
    ));
}

#[test]
fn test_near_straight_arc_is_out_of_range() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    let result = session.apply_edit(
        THREE_POINT,
        &[-1_000_000_000.0, 0.0, 0.0, 1.0, 1_000_000_000.0, 0.0],
    );
    assert!(result.is_err());
    let errors = session.validate();
    assert!(matches!(errors[..], [GeometryError::ArcOutOfRange { .. }]));
    assert!(errors[0].to_string().contains("representable coordinate range"));
}

#[test]
fn test_center_on_endpoint_is_refused() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    // The circumcenter (0.5, 0.5) rounds onto the end point.
    session
        .apply_edit(THREE_POINT, &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0])
        .unwrap();
    let Shape::Arc(arc) = session.preview() else {
        panic!("expected an arc");
    };
    assert_eq!(arc.center, arc.end);
    assert!(matches!(
        session.validate()[..],
        [GeometryError::ArcOutOfRange { .. }]
    ));
    assert!(session.request_commit().is_err());
    assert!(session.is_open());
}

#[test]
fn test_collinear_snapped_points_are_out_of_range() {
    let mut shape = quarter_arc();
    let mut session = EditingSession::new(&mut shape);
    // Radius sqrt(2): start, mid and end snap to (1, 1), (0, 1) and (-1, 1).
    session
        .apply_edit(CENTER_START, &[0.0, 0.0, 1.0, 1.0, -90.0])
        .unwrap();
    assert_eq!(
        session.field_values(THREE_POINT).unwrap().as_slice(),
        &[1.0, 1.0, 0.0, 1.0, -1.0, 1.0]
    );
    assert!(matches!(
        session.validate()[..],
        [GeometryError::ArcOutOfRange { .. }]
    ));
    assert!(session.request_commit().is_err());
}
