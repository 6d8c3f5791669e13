//! Editing sessions.
//!
//! A session binds a synchronizer to a working copy of the caller's shape.
//! Edits flow in as raw field text, numeric values or whole views; each one
//! pushes its view and re-pulls every other view. The caller's shape is only
//! written by a successful [`EditingSession::request_commit`].

use shapekit_core::{FieldError, GeometryError, SessionError};
use shapekit_settings::EditorConfig;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::model::{Shape, ShapeType};
use crate::sync::Synchronizer;
use crate::views::{parse_field, FieldId, RefreshSet, View, ViewId, ViewSet, ViewValues};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Committed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Closed(CloseReason),
}

/// One field changed to a new numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditEvent {
    pub view: ViewId,
    pub field: FieldId,
    pub value: f64,
}

/// What the editing surface needs to redraw after an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub refresh: RefreshSet,
    /// Fresh values for every view in `refresh`.
    pub updates: Vec<(ViewId, ViewValues)>,
    /// Canonical state of the working copy.
    pub preview: Shape,
}

/// Exclusive editing session over one shape.
pub struct EditingSession<'a> {
    id: Uuid,
    target: &'a mut Shape,
    sync: Synchronizer,
    config: EditorConfig,
    state: SessionState,
    rejected: Option<(ViewId, GeometryError)>,
}

impl<'a> EditingSession<'a> {
    pub fn new(target: &'a mut Shape) -> Self {
        Self::with_config(target, EditorConfig::default())
    }

    pub fn with_config(target: &'a mut Shape, config: EditorConfig) -> Self {
        let id = Uuid::new_v4();
        let sync = Synchronizer::new(*target, &config);
        debug!(session = %id, kind = %sync.shape_type(), "editing session opened");
        Self {
            id,
            target,
            sync,
            config,
            state: SessionState::Editing,
            rejected: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Editing
    }

    pub fn shape_type(&self) -> ShapeType {
        self.sync.shape_type()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The caller's shape as it was when the session opened.
    pub fn original(&self) -> &Shape {
        &*self.target
    }

    /// Live canonical state of the working copy.
    pub fn preview(&self) -> Shape {
        self.sync.shape()
    }

    pub fn views(&self) -> &ViewSet {
        self.sync.views()
    }

    pub fn view(&self, view: ViewId) -> Result<&View, SessionError> {
        self.sync.view(view)
    }

    pub fn field_values(&self, view: ViewId) -> Result<ViewValues, SessionError> {
        Ok(self.sync.view(view)?.values())
    }

    pub fn field_texts(&self, view: ViewId) -> Result<Vec<String>, SessionError> {
        Ok(self.sync.view(view)?.texts())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Editing => Ok(()),
            SessionState::Closed(_) => Err(SessionError::Closed),
        }
    }

    /// Replace every value of `view`, push it, and pull the others.
    pub fn apply_edit(&mut self, view: ViewId, values: &[f64]) -> Result<RefreshSet, SessionError> {
        self.ensure_open()?;
        self.sync
            .view_mut(view)?
            .set_values(values, &self.config)?;
        self.propagate(view)
    }

    /// Store `text` verbatim in one field, then push its view.
    ///
    /// Text that does not parse is refused before anything changes.
    pub fn edit_field_text(
        &mut self,
        view: ViewId,
        field: FieldId,
        text: &str,
    ) -> Result<RefreshSet, SessionError> {
        self.ensure_open()?;
        let config = &self.config;
        let bound = self.sync.view_mut(view)?.field_mut(field)?;
        let value = parse_field(field.kind(), text, config)?;
        bound.set_raw(text, value);
        self.propagate(view)
    }

    /// Set one field to a numeric value, then push its view.
    pub fn set_field(
        &mut self,
        view: ViewId,
        field: FieldId,
        value: f64,
    ) -> Result<RefreshSet, SessionError> {
        self.ensure_open()?;
        if !value.is_finite() {
            return Err(FieldError::Parse {
                text: value.to_string(),
                reason: "value is not finite".into(),
            }
            .into());
        }
        self.sync
            .view_mut(view)?
            .field_mut(field)?
            .set_value(value, &self.config);
        self.propagate(view)
    }

    pub fn handle(&mut self, event: EditEvent) -> Result<EditOutcome, SessionError> {
        let refresh = self.set_field(event.view, event.field, event.value)?;
        let updates = refresh
            .iter()
            .map(|view| Ok((view, self.field_values(view)?)))
            .collect::<Result<Vec<_>, SessionError>>()?;
        Ok(EditOutcome {
            refresh,
            updates,
            preview: self.preview(),
        })
    }

    fn propagate(&mut self, view: ViewId) -> Result<RefreshSet, SessionError> {
        if let Err(err) = self.sync.push(view) {
            warn!(session = %self.id, view = %view, error = %err, "push rejected");
            if let SessionError::Geometry(geometry) = &err {
                self.rejected = Some((view, geometry.clone()));
            }
            return Err(err);
        }
        self.rejected = None;
        debug!(session = %self.id, view = %view, "pushed");

        let refresh = RefreshSet::after_edit(view);
        for other in refresh.iter() {
            self.sync.pull(other, &self.config)?;
        }
        debug!(session = %self.id, views = refresh.len(), "pulled");
        Ok(refresh)
    }

    /// Re-pull every view, including one the user was typing in.
    ///
    /// Refused text is overwritten by the canonical state, so a standing
    /// rejection is dropped as well.
    pub fn pull_all(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        for view in ViewId::all_for(self.shape_type()) {
            self.sync.pull(*view, &self.config)?;
        }
        self.rejected = None;
        debug!(session = %self.id, "pulled all views");
        Ok(())
    }

    /// Only rectangles carry a corner radius.
    pub fn set_corner_radius(&mut self, radius: i64) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.sync.set_corner_radius(radius)?;
        debug!(session = %self.id, radius, "corner radius set");
        Ok(())
    }

    /// The view whose last push was refused, if the refusal still stands.
    pub fn rejected_edit(&self) -> Option<&(ViewId, GeometryError)> {
        self.rejected.as_ref()
    }

    /// Every reason the working copy cannot be committed, in report order.
    pub fn validate(&self) -> Vec<GeometryError> {
        let mut errors: Vec<GeometryError> =
            self.rejected.iter().map(|(_, err)| err.clone()).collect();
        errors.extend(self.sync.validate(&self.config));
        errors
    }

    /// Copy the working copy to the caller's shape if it validates.
    ///
    /// On failure the session stays open and the caller's shape is untouched.
    pub fn request_commit(&mut self) -> Result<Shape, SessionError> {
        self.ensure_open()?;
        let errors = self.validate();
        if !errors.is_empty() {
            warn!(session = %self.id, count = errors.len(), "commit refused");
            return Err(SessionError::ValidationFailed(errors));
        }

        let shape = self.sync.shape();
        *self.target = shape;
        self.state = SessionState::Closed(CloseReason::Committed);
        debug!(session = %self.id, "committed");
        Ok(shape)
    }

    /// Drop the working copy; the caller's shape is left as it was.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.state = SessionState::Closed(CloseReason::Cancelled);
        debug!(session = %self.id, "cancelled");
        Ok(())
    }
}
