use shapekit_core::{FieldError, MeasurementSystem, Point, SessionError};
use shapekit_designer::{
    CircleView, CloseReason, DesignCircle, DesignRectangle, EditEvent, EditingSession, FieldId,
    RectangleView, SessionState, Shape, ViewId,
};
use shapekit_settings::EditorConfig;

const CORNERS: ViewId = ViewId::Rectangle(RectangleView::Corners);
const CORNER_SIZE: ViewId = ViewId::Rectangle(RectangleView::CornerAndSize);
const RADIUS: ViewId = ViewId::Circle(CircleView::CenterAndRadius);
const POINT: ViewId = ViewId::Circle(CircleView::CenterAndPoint);

const MM: i32 = 1_000_000;

fn ten_mm_square() -> Shape {
    DesignRectangle::new(Point::new(0, 0), Point::new(10 * MM, 10 * MM)).into()
}

#[test]
fn test_initial_pull_formats_every_field() {
    let mut shape = ten_mm_square();
    let session = EditingSession::new(&mut shape);
    assert_eq!(
        session.field_texts(CORNERS).unwrap(),
        vec!["0.0000", "0.0000", "10.0000", "10.0000"]
    );
}

#[test]
fn test_edited_view_keeps_raw_text() {
    let mut shape = ten_mm_square();
    let mut session = EditingSession::new(&mut shape);
    session.edit_field_text(CORNERS, FieldId::StartX, "5").unwrap();
    session.edit_field_text(CORNERS, FieldId::EndX, " 100").unwrap();

    assert_eq!(
        session.field_texts(CORNERS).unwrap(),
        vec!["5", "0.0000", " 100", "10.0000"]
    );
    assert_eq!(
        session.field_texts(CORNER_SIZE).unwrap(),
        vec!["5.0000", "0.0000", "95.0000", "10.0000"]
    );
}

#[test]
fn test_unparsable_text_changes_nothing() {
    let mut shape = ten_mm_square();
    let mut session = EditingSession::new(&mut shape);
    let result = session.edit_field_text(CORNERS, FieldId::StartX, "abc");
    assert!(matches!(
        result,
        Err(SessionError::Field(FieldError::Parse { .. }))
    ));
    assert_eq!(session.field_texts(CORNERS).unwrap()[0], "0.0000");
    assert_eq!(session.preview(), ten_mm_square());
}

#[test]
fn test_field_from_another_view_is_refused() {
    let mut shape = ten_mm_square();
    let mut session = EditingSession::new(&mut shape);
    assert!(matches!(
        session.set_field(CORNERS, FieldId::Width, 1.0),
        Err(SessionError::Field(FieldError::NotInView { .. }))
    ));
}

#[test]
fn test_imperial_fractional_input() {
    let mut shape: Shape = DesignCircle::new(Point::new(0, 0), Point::new(MM, 0)).into();
    let config = EditorConfig {
        measurement_system: MeasurementSystem::Imperial,
        ..EditorConfig::default()
    };
    let mut session = EditingSession::with_config(&mut shape, config);
    session.edit_field_text(RADIUS, FieldId::Radius, "1 1/4").unwrap();
    assert_eq!(
        session.field_texts(POINT).unwrap(),
        vec!["0.0000", "0.0000", "1.2500", "0.0000"]
    );
}

#[test]
fn test_handle_reports_updates_and_preview() {
    let mut shape: Shape = DesignCircle::new(Point::new(0, 0), Point::new(10, 0)).into();
    let mut session = EditingSession::new(&mut shape);
    let outcome = session
        .handle(EditEvent {
            view: RADIUS,
            field: FieldId::Radius,
            value: 40.0,
        })
        .unwrap();
    assert_eq!(outcome.refresh.edited(), RADIUS);
    assert_eq!(outcome.updates.len(), 1);
    assert_eq!(outcome.updates[0].0, POINT);
    assert_eq!(outcome.updates[0].1.as_slice(), &[0.0, 0.0, 40.0, 0.0]);
    assert_eq!(
        outcome.preview,
        Shape::Circle(DesignCircle::new(Point::new(0, 0), Point::new(40, 0)))
    );
}

#[test]
fn test_validate_is_idempotent() {
    let mut shape = ten_mm_square();
    let mut session = EditingSession::new(&mut shape);
    session.apply_edit(CORNERS, &[3.0, 3.0, 3.0, 3.0]).unwrap();
    let first = session.validate();
    let second = session.validate();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn test_failed_commit_leaves_target_untouched() {
    let original = ten_mm_square();
    let mut shape = original;
    {
        let mut session = EditingSession::new(&mut shape);
        session.apply_edit(CORNERS, &[3.0, 3.0, 3.0, 3.0]).unwrap();
        assert!(session.request_commit().is_err());
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(*session.original(), original);
        session.cancel().unwrap();
        assert_eq!(session.state(), SessionState::Closed(CloseReason::Cancelled));
    }
    assert_eq!(shape, original);
}

#[test]
fn test_cancel_discards_valid_edits() {
    let original = ten_mm_square();
    let mut shape = original;
    {
        let mut session = EditingSession::new(&mut shape);
        session.apply_edit(CORNERS, &[0.0, 0.0, 50.0, 50.0]).unwrap();
        session.cancel().unwrap();
        assert!(matches!(session.request_commit(), Err(SessionError::Closed)));
    }
    assert_eq!(shape, original);
}

#[test]
fn test_sessions_have_distinct_ids() {
    let mut a = ten_mm_square();
    let mut b = ten_mm_square();
    let first = EditingSession::new(&mut a);
    let second = EditingSession::new(&mut b);
    assert_ne!(first.id(), second.id());
}
