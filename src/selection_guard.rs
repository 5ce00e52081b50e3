//! Scoped clearing of a view's text selection.

use crate::view::{SelectionSpan, SourceView};

/// Clears the selection so it is not painted, and puts the identical span
/// back when dropped. Restoration failures are logged and swallowed.
pub struct SelectionSuspension<'a> {
    view: &'a dyn SourceView,
    saved: Option<SelectionSpan>,
}

impl<'a> SelectionSuspension<'a> {
    /// Remove `span` from `view` for the lifetime of the guard.
    ///
    /// With `None` the guard does nothing. A failure to clear is logged;
    /// the capture still proceeds and the span is still restored.
    pub fn suspend(view: &'a dyn SourceView, span: Option<SelectionSpan>) -> Self {
        if span.is_some()
            && let Err(e) = view.remove_selection()
        {
            log::warn!("Failed to clear selection before capture: {e}");
        }
        Self { view, saved: span }
    }
}

impl Drop for SelectionSuspension<'_> {
    fn drop(&mut self) {
        if let Some(span) = self.saved.take() {
            match self.view.set_selection(span) {
                Ok(()) => log::trace!(
                    "Restored selection {}..{}",
                    span.start_offset,
                    span.end_offset
                ),
                Err(e) => log::warn!(
                    "Failed to restore selection {}..{}: {e}",
                    span.start_offset,
                    span.end_offset
                ),
            }
        }
    }
}
