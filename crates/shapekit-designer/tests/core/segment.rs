use shapekit_core::{Point, SessionError};
use shapekit_designer::{DesignSegment, EditingSession, FieldId, SegmentView, Shape, ViewId};

const ENDPOINTS: ViewId = ViewId::Segment(SegmentView::Endpoints);
const POLAR: ViewId = ViewId::Segment(SegmentView::PolarFromStart);
const MIDPOINT: ViewId = ViewId::Segment(SegmentView::StartAndMidpoint);

fn segment() -> Shape {
    DesignSegment::new(Point::new(0, 0), Point::new(100, 0)).into()
}

#[test]
fn test_endpoints_pull_into_polar_and_midpoint() {
    let mut shape = segment();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(ENDPOINTS, &[0.0, 0.0, 30.0, -40.0]).unwrap();

    let polar = session.field_values(POLAR).unwrap();
    assert_eq!(polar[2], 50.0);
    // Negative internal Y is up on screen, so the editor angle is positive.
    assert!((polar[3] - 53.130_102_354_155_98).abs() < 1e-9);

    assert_eq!(
        session.field_values(MIDPOINT).unwrap().as_slice(),
        &[0.0, 0.0, 15.0, -20.0]
    );
}

#[test]
fn test_polar_angle_stays_in_half_open_range() {
    let mut shape = segment();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(ENDPOINTS, &[0.0, 0.0, -100.0, 0.0]).unwrap();
    let polar = session.field_values(POLAR).unwrap();
    assert_eq!(polar[3], 180.0);
}

#[test]
fn test_length_edit_keeps_angle() {
    let mut shape = segment();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(POLAR, &[0.0, 0.0, 100.0, 90.0]).unwrap();
    session.set_field(POLAR, FieldId::Length, 200.0).unwrap();
    assert_eq!(
        session.field_values(ENDPOINTS).unwrap().as_slice(),
        &[0.0, 0.0, 0.0, -200.0]
    );
}

#[test]
fn test_midpoint_reflection_overflow_keeps_state() {
    let mut shape = segment();
    let mut session = EditingSession::new(&mut shape);
    let result = session.apply_edit(MIDPOINT, &[-2_000_000_000.0, 0.0, 1_000_000_000.0, 0.0]);
    assert!(matches!(result, Err(SessionError::Geometry(_))));
    assert_eq!(session.preview(), segment());
    assert!(session.request_commit().is_err());
}

#[test]
fn test_zero_length_segment_commits() {
    let mut shape = segment();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(ENDPOINTS, &[7.0, 7.0, 7.0, 7.0]).unwrap();
    assert!(session.request_commit().is_ok());
}
