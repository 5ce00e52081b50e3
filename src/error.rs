//! Capture-boundary error types.
//!
//! Every failure inside a capture is converted into one [`CaptureError`].
//! Failures while restoring transient view state are logged, never returned.

use crate::view::ViewError;
use par_shot_render::RenderError;
use thiserror::Error;

/// Root cause of a failed capture
#[derive(Debug, Error)]
pub enum CaptureFailure {
    /// A metrics query against the host view failed
    #[error(transparent)]
    View(#[from] ViewError),

    /// Painting or raster assembly failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Error returned by a capture request
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Precondition failure: there is no view to capture
    #[error("Screenshotting code is only available in an editor")]
    NoActiveView,

    #[error("Failed to capture screenshot: {0}")]
    Failed(#[source] CaptureFailure),
}

impl From<ViewError> for CaptureError {
    fn from(e: ViewError) -> Self {
        CaptureError::Failed(CaptureFailure::View(e))
    }
}

impl From<RenderError> for CaptureError {
    fn from(e: RenderError) -> Self {
        CaptureError::Failed(CaptureFailure::Render(e))
    }
}
