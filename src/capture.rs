//! Capture orchestration: resolve, suspend transient state, composite.

use crate::caret_guard::CaretVisibilityGuard;
use crate::diff::{DiffSide, DiffViewer, ForcedViewport};
use crate::error::CaptureError;
use crate::geometry::{RegionGeometryResolver, ResolvedRegions};
use crate::selection_guard::SelectionSuspension;
use crate::view::SourceView;
use par_shot_config::Config;
use par_shot_render::{
    Compositor, DiffPalette, DividerRequest, Rgba, RgbaImage, VisualRegion, merge_horizontal,
    opaque, paint_divider,
};
use std::path::Path;

/// File stem used when the view has no file name
pub const DEFAULT_FILE_STEM: &str = "screenshot";

/// What a capture request points at
#[derive(Clone, Copy)]
pub enum CaptureTarget<'a> {
    /// No focused view
    None,
    Editor(&'a dyn SourceView),
    Diff {
        viewer: &'a dyn DiffViewer,
        focused: DiffSide,
    },
}

impl<'a> CaptureTarget<'a> {
    /// The view the user is working in, if any
    pub fn focused_view(&self) -> Option<&'a dyn SourceView> {
        match *self {
            CaptureTarget::None => None,
            CaptureTarget::Editor(view) => Some(view),
            CaptureTarget::Diff { viewer, focused } => Some(viewer.view(focused)),
        }
    }

    /// Diff targets without a selection in the focused pane take the dual-pane path
    pub fn is_dual_pane(&self) -> bool {
        matches!(self, CaptureTarget::Diff { .. })
            && self
                .focused_view()
                .is_some_and(|view| view.selection().is_none())
    }
}

/// Which capture path produced a screenshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Selection,
    Document,
    DualPane,
}

/// A finished capture ready for delivery
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub image: RgbaImage,
    pub mode: CaptureMode,
    pub file_stem: String,
}

/// Composes screenshots of source views.
#[derive(Debug, Clone, Copy)]
pub struct ScreenshotEngine {
    resolver: RegionGeometryResolver,
    palette: DiffPalette,
    divider_background: Rgba<u8>,
    diff_divider_overlay: bool,
}

impl Default for ScreenshotEngine {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ScreenshotEngine {
    pub fn from_config(config: &Config) -> Self {
        Self {
            resolver: RegionGeometryResolver::from_config(config),
            palette: DiffPalette::from(&config.diff_colors),
            divider_background: opaque(config.diff_colors.divider_background),
            diff_divider_overlay: config.diff_divider_overlay,
        }
    }

    pub fn resolver(&self) -> &RegionGeometryResolver {
        &self.resolver
    }

    /// Route a request to the single-view or dual-pane path
    pub fn capture(&self, target: CaptureTarget<'_>) -> Result<Screenshot, CaptureError> {
        let view = target.focused_view().ok_or(CaptureError::NoActiveView)?;
        let file_stem = file_stem(view);

        let (image, mode) = match target {
            CaptureTarget::Diff { viewer, focused } if target.is_dual_pane() => {
                crate::debug_info!("CAPTURE", "Dual-pane capture of {}", file_stem);
                (self.capture_diff(viewer, focused)?, CaptureMode::DualPane)
            }
            _ => {
                let mode = if view.selection().is_some() {
                    CaptureMode::Selection
                } else {
                    CaptureMode::Document
                };
                crate::debug_info!("CAPTURE", "{:?} capture of {}", mode, file_stem);
                (self.capture_view(view)?, mode)
            }
        };

        log::info!(
            "Captured {}x{} {:?} screenshot of {}",
            image.width(),
            image.height(),
            mode,
            file_stem
        );
        Ok(Screenshot {
            image,
            mode,
            file_stem,
        })
    }

    /// Capture one view: its selection if any, otherwise the whole document.
    ///
    /// The caret is hidden and the selection cleared while painting; both
    /// are restored before this returns, whether or not painting succeeded.
    pub fn capture_view(&self, view: &dyn SourceView) -> Result<RgbaImage, CaptureError> {
        // Dropped last: the selection comes back before the caret does
        let _caret = CaretVisibilityGuard::acquire(view);

        let resolved = self.resolver.resolve(view)?;
        let _selection = SelectionSuspension::suspend(view, resolved.selection);

        let regions = ordered_regions(view, &resolved);
        let image = Compositor::new()
            .with_background(view.background())
            .paint(&regions)?;
        Ok(image)
    }

    /// Capture both panes of a diff viewer and join them across the divider.
    ///
    /// Gaps below the shorter pane show the focused pane's background.
    pub fn capture_diff(
        &self,
        viewer: &dyn DiffViewer,
        focused: DiffSide,
    ) -> Result<RgbaImage, CaptureError> {
        let left = self.capture_view(viewer.left())?;
        let right = self.capture_view(viewer.right())?;
        let height = left.height().max(right.height());
        let width = left.width().max(right.width());

        let divider_width = viewer.divider_width();
        let divider = if divider_width > 0 {
            let changes = viewer.changes();
            let separators = viewer.folding_separators();
            let left_lines = ForcedViewport::new(viewer.left(), width, height);
            let right_lines = ForcedViewport::new(viewer.right(), width, height);
            let request = DividerRequest {
                width: divider_width,
                height,
                background: viewer
                    .divider_background()
                    .unwrap_or(self.divider_background),
                palette: self.palette,
                changes: &changes,
                separators: &separators,
                align_changes: viewer.align_changes(),
                overlay: self.diff_divider_overlay,
                left: &left_lines,
                right: &right_lines,
            };
            Some(paint_divider(&request)?)
        } else {
            log::debug!("Diff viewer reports no divider width, joining panes directly");
            None
        };

        let mut rasters: Vec<&RgbaImage> = vec![&left];
        rasters.extend(divider.as_ref());
        rasters.push(&right);

        let background = viewer.view(focused).background();
        Ok(merge_horizontal(background, &rasters)?)
    }
}

/// Regions in composition order: gutter first when it sits on the left
fn ordered_regions<'a>(
    view: &'a dyn SourceView,
    resolved: &ResolvedRegions,
) -> Vec<VisualRegion<'a>> {
    let content = VisualRegion::new("content", resolved.content, view.content());
    let gutter = view
        .gutter()
        .filter(|_| resolved.gutter.visible)
        .map(|g| VisualRegion::new("gutter", resolved.gutter, g.paintable()));

    match gutter {
        Some(gutter) if resolved.gutter_first() => vec![gutter, content],
        Some(gutter) => vec![content, gutter],
        None => vec![content],
    }
}

/// File name of the view without any directory part, or the default stem
fn file_stem(view: &dyn SourceView) -> String {
    view.file_name()
        .as_deref()
        .and_then(|name| Path::new(name).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILE_STEM.to_string())
}
