//! # ShapeKit
//!
//! A geometry parameterization engine for editing 2D vector shapes through
//! alternate, mutually consistent views.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Fixed-point geometry, field units, error types
//! 2. **shapekit-settings** - Editor configuration (units, precision, arc range policy)
//! 3. **shapekit-designer** - Shape model, views, synchronizers, editing sessions
//! 4. **shapekit** - This facade, plus logging setup
//!
//! ## Features
//!
//! - **Five shape kinds**: rectangle, segment, arc, circle, cubic Bézier
//! - **Alternate views**: corners or center and size, polar or midpoint segments,
//!   center/angle or three-point arcs, radius or point circles
//! - **Live propagation**: editing one view refreshes every other view of the shape
//! - **Atomic commit**: the caller's shape changes only when validation passes

use std::path::Path;

use anyhow::Context;

pub use shapekit_core::{
    units, Angle, Coord, Error, FieldError, GeometryError, MeasurementSystem, Point, Result,
    SessionError, IU_PER_INCH, IU_PER_MM,
};
pub use shapekit_designer as designer;
pub use shapekit_designer::{
    ArcView, BezierView, CircleView, DesignArc, DesignBezier, DesignCircle, DesignRectangle,
    DesignSegment, EditEvent, EditOutcome, EditingSession, FieldId, FieldKind, RectangleView,
    RefreshSet, SegmentView, SessionState, Shape, ShapeType, ViewId,
};
pub use shapekit_settings::{default_config_path, EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log line layout for file logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// `RUST_LOG` when it is set and parses, `info` otherwise.
fn env_filter() -> tracing_subscriber::EnvFilter {
    env_filter_from(std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn env_filter_from(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    directives
        .and_then(|d| tracing_subscriber::EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(())
}

/// Initialize logging to an append-only file
pub fn init_logging_to_file(path: &Path, format: LogFormat) -> anyhow::Result<()> {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let writer = Mutex::new(file);

    let registry = tracing_subscriber::registry().with(env_filter());
    let installed = match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(writer).json())
            .try_init(),
    };
    installed.context("a global tracing subscriber is already installed")?;

    Ok(())
}

/// Load the editor configuration, falling back to defaults when the file is missing
///
/// `None` reads the platform default location.
pub fn load_editor_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    let config = EditorConfig::load_or_default(&path)
        .with_context(|| format!("failed to load editor config from {}", path.display()))?;
    tracing::info!(path = %path.display(), units = %config.measurement_system, "editor config ready");
    Ok(config)
}
