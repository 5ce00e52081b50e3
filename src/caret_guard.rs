//! Scoped suppression of caret rendering.

use crate::view::{CaretToggle, SourceView};

/// Hides the caret for its lifetime, restoring the previous visibility on
/// every exit path.
///
/// The view-level toggle is probed first, then the caret-model toggle. A
/// view with neither makes the guard a no-op.
pub struct CaretVisibilityGuard<'a> {
    toggle: Option<&'a dyn CaretToggle>,
    previous: Option<bool>,
}

impl<'a> CaretVisibilityGuard<'a> {
    pub fn acquire(view: &'a dyn SourceView) -> Self {
        let toggle = view.caret_toggle().or_else(|| view.caret_model_toggle());
        let Some(toggle) = toggle else {
            log::trace!("View exposes no caret toggle");
            return Self {
                toggle: None,
                previous: None,
            };
        };

        let previous = toggle.caret_visible();
        if let Err(e) = toggle.set_caret_visible(false) {
            log::warn!("Failed to hide caret: {e}");
        }
        Self {
            toggle: Some(toggle),
            previous,
        }
    }
}

impl Drop for CaretVisibilityGuard<'_> {
    fn drop(&mut self) {
        if let Some(toggle) = self.toggle.take() {
            // Unreadable state restores to visible
            let visible = self.previous.unwrap_or(true);
            if let Err(e) = toggle.set_caret_visible(visible) {
                log::warn!("Failed to restore caret visibility: {e}");
            }
        }
    }
}
