//! Turns live view metrics into placed region geometry.
//!
//! Resolution is pure: it reads the view (including its selection) and
//! never mutates it, so resolving the same view state twice yields the
//! same geometry.

use crate::metrics::LineMetricsProbe;
use crate::selection_crop::SelectionCrop;
use crate::view::{SelectionSpan, SourceView, ViewError};
use par_shot_config::{Config, MAX_SELECTION_PADDING};
use par_shot_render::RegionGeometry;

/// Which side of the content the gutter sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutterSide {
    Left,
    Right,
}

/// Geometry of every capturable area of one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRegions {
    pub content: RegionGeometry,
    pub gutter: RegionGeometry,
    /// `None` when the gutter is hidden
    pub gutter_side: Option<GutterSide>,
    pub selection: Option<SelectionSpan>,
    /// Pixels trimmed from the left of the content
    pub minimal_indent: i32,
}

impl ResolvedRegions {
    /// True when the gutter is painted before the content
    pub fn gutter_first(&self) -> bool {
        self.gutter_side == Some(GutterSide::Left)
    }
}

/// Computes content and gutter geometry for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGeometryResolver {
    pub include_gutter: bool,
    pub selection_padding: i32,
    pub trim_indent: bool,
    pub default_tab_size: usize,
}

impl Default for RegionGeometryResolver {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RegionGeometryResolver {
    pub fn from_config(config: &Config) -> Self {
        Self {
            include_gutter: config.include_gutter,
            selection_padding: config.selection_padding.min(MAX_SELECTION_PADDING) as i32,
            trim_indent: config.trim_indent,
            default_tab_size: config.default_tab_size,
        }
    }

    pub fn with_include_gutter(mut self, include_gutter: bool) -> Self {
        self.include_gutter = include_gutter;
        self
    }

    pub fn resolve(&self, view: &dyn SourceView) -> Result<ResolvedRegions, ViewError> {
        let selection = view.selection();
        let probe = LineMetricsProbe::new(view, self.default_tab_size);
        let line_height = probe.line_height();

        let (mut content, minimal_indent) = match selection {
            Some(span) => {
                let start = probe.point(span.start_offset)?;
                let end = probe.point(span.end_offset)?;
                let crop = SelectionCrop::compute(view, span, self.default_tab_size)?;

                let mut content = RegionGeometry::sized(
                    crop.max_width.saturating_add(self.selection_padding),
                    end.y - start.y + line_height,
                );
                content.translate_y = -start.y;
                // A selection inside leading whitespace keeps its own extent
                let indent = if self.trim_indent {
                    crop.minimal_indent_px.min(crop.max_width).max(0)
                } else {
                    0
                };
                (content, indent)
            }
            None => {
                // Document space, so scrolling has no effect on the height
                let height = probe.last_line_y()? + line_height;
                (
                    RegionGeometry::sized(view.content_preferred_width(), height),
                    0,
                )
            }
        };

        let (mut gutter, gutter_side) = match view.gutter() {
            Some(host_gutter) if self.include_gutter => {
                let mut gutter = RegionGeometry::sized(host_gutter.preferred_width(), content.height);
                gutter.translate_y = content.translate_y;
                let side = if host_gutter.screen_x() > view.content_screen_x() {
                    GutterSide::Right
                } else {
                    GutterSide::Left
                };
                (gutter, Some(side))
            }
            Some(_) => (RegionGeometry::hidden(), None),
            None => {
                if self.include_gutter {
                    log::debug!("View has no gutter, capturing content only");
                }
                (RegionGeometry::hidden(), None)
            }
        };

        place(&mut content, &mut gutter, gutter_side, minimal_indent);

        let resolved = ResolvedRegions {
            content,
            gutter,
            gutter_side,
            selection,
            minimal_indent,
        };
        log::debug!("Resolved regions: {:?}", resolved);
        Ok(resolved)
    }
}

/// Placement pass: position content and gutter side by side, then trim the
/// shared indentation off the content. The trim composes with the gutter
/// offset instead of replacing it.
fn place(
    content: &mut RegionGeometry,
    gutter: &mut RegionGeometry,
    side: Option<GutterSide>,
    minimal_indent: i32,
) {
    content.x = 0;
    content.translate_x = 0;
    if side == Some(GutterSide::Left) {
        content.x = gutter.width;
        content.translate_x = gutter.width;
    }

    content.translate_x -= minimal_indent;
    content.width = (content.width - minimal_indent).max(0);

    match side {
        Some(GutterSide::Left) => {
            gutter.x = 0;
            gutter.translate_x = 0;
        }
        Some(GutterSide::Right) => {
            gutter.x = content.width;
            gutter.translate_x = content.width;
        }
        None => {}
    }
}
