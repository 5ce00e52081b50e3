//! Command-line capture flow: load config, build the views, capture, deliver.

use crate::action::Presentation;
use crate::capture::{CaptureTarget, ScreenshotEngine};
use crate::cli::{RuntimeOptions, SelectionArg};
use crate::delivery::deliver;
use crate::diff::DiffSide;
use crate::geometry::GutterSide;
use crate::host::{TextDiffViewer, TextView};
use crate::view::{SelectionSpan, SourceView};
use anyhow::{Context, Result};
use par_shot_config::Config;
use std::path::Path;

/// Load the config named on the command line, or the default one
pub fn load_config(options: &RuntimeOptions) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load()?,
    };
    options.apply_to(&mut config);
    Ok(config)
}

/// Build a view for `path` with the display options from the command line
///
/// The gutter is always built; the engine decides whether to include it.
pub fn open_view(path: &Path, options: &RuntimeOptions) -> Result<TextView> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    // Line endings are normalized so offsets count one char per newline
    let text = text.replace("\r\n", "\n");

    let side = if options.gutter_right {
        GutterSide::Right
    } else {
        GutterSide::Left
    };
    Ok(TextView::new(&text)
        .with_tab_size(options.tab_size.or(Some(4)))
        .with_wrap(options.wrap)
        .with_file_name(path.display().to_string())
        .with_gutter(side))
}

/// Apply the command-line selection to `view`
pub fn select(view: &TextView, selection: SelectionArg) -> Result<()> {
    let span = match selection {
        SelectionArg::Offsets { start, end } => SelectionSpan::new(start, end),
        SelectionArg::Lines { first, last } => {
            let last = last.min(view.line_count());
            let start = view.line_start_offset(first - 1)?;
            let end = view.line_end_offset(last - 1)?;
            SelectionSpan::new(start, end)
        }
    };
    view.set_selection(span)
        .with_context(|| format!("Invalid selection {}..{}", span.start_offset, span.end_offset))?;
    crate::debug_log!("RUNNER", "Selected {:?}", span);
    Ok(())
}

/// Run one capture. Returns the process exit code.
pub fn run(options: &RuntimeOptions) -> Result<i32> {
    let config = load_config(options)?;
    crate::debug::apply_config_level(config.log_level);
    log::debug!("Effective config: {:?}", config);

    let engine = ScreenshotEngine::from_config(&config);
    let left = open_view(&options.file, options)?;

    let (single, viewer) = match &options.diff_with {
        Some(right_path) => {
            let right = open_view(right_path, options)?;
            let mut viewer = TextDiffViewer::new(left, right).with_align_changes(options.align);
            if let Some(width) = options.divider_width {
                viewer = viewer.with_divider_width(width);
            }
            (None, Some(viewer))
        }
        None => (Some(left), None),
    };

    let target = match (&single, &viewer) {
        (_, Some(viewer)) => {
            let focused = options.focus.unwrap_or(DiffSide::Left);
            let focused_view = match focused {
                DiffSide::Left => viewer.left_view(),
                DiffSide::Right => viewer.right_view(),
            };
            if let Some(selection) = options.selection {
                select(focused_view, selection)?;
            }
            CaptureTarget::Diff { viewer, focused }
        }
        (Some(view), None) => {
            if let Some(selection) = options.selection {
                select(view, selection)?;
            }
            CaptureTarget::Editor(view)
        }
        (None, None) => CaptureTarget::None,
    };

    let presentation = Presentation::for_target(&target, &config);
    if !presentation.enabled {
        eprintln!(
            "par-shot: {}",
            presentation.hint.unwrap_or("screenshot action is disabled")
        );
        return Ok(1);
    }
    log::info!("Running '{}'", presentation.label);

    let screenshot = match engine.capture(target) {
        Ok(screenshot) => screenshot,
        Err(e) => {
            crate::debug_error!("RUNNER", "Capture failed: {}", e);
            eprintln!("par-shot: {e}");
            return Ok(1);
        }
    };

    let report = deliver(&screenshot, &config);
    if report.is_success() {
        println!("{}", report.message());
        Ok(0)
    } else {
        eprintln!("par-shot: {}", report.message());
        Ok(1)
    }
}
