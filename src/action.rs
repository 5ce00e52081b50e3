//! Enablement and label of the screenshot action for the current target.

use crate::capture::CaptureTarget;
use crate::delivery::ENABLE_DESTINATION_HINT;
use par_shot_config::Config;

pub const LABEL_SELECTED: &str = "Screenshot Selected Code";
pub const LABEL_DIFF: &str = "Screenshot Diff Code(Left + Right)";
pub const LABEL_ALL: &str = "Screenshot All Code";

/// How the screenshot action should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub enabled: bool,
    pub label: &'static str,
    /// Why the action is disabled, when it is
    pub hint: Option<&'static str>,
}

impl Presentation {
    pub fn for_target(target: &CaptureTarget<'_>, config: &Config) -> Self {
        if !config.is_delivery_enabled() {
            return Self {
                enabled: false,
                label: LABEL_ALL,
                hint: Some(ENABLE_DESTINATION_HINT),
            };
        }

        let has_selection = target
            .focused_view()
            .is_some_and(|view| view.selection().is_some());
        let label = match target {
            _ if has_selection => LABEL_SELECTED,
            CaptureTarget::Diff { .. } => LABEL_DIFF,
            _ => LABEL_ALL,
        };

        Self {
            enabled: true,
            label,
            hint: None,
        }
    }
}
