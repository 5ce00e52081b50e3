//! End-to-end captures: raster sizes, transient state and routing.

mod common;

use common::{CELL, FailingView, LINE, count_color, pixel};
use par_shot::diff::{DiffSide, DiffViewer};
use par_shot::host::{CaretAccess, TextDiffViewer, TextTheme, TextView};
use par_shot::render::{
    Canvas, ChangeType, DiffChangeSpan, Paintable, RenderError, Rgba, opaque,
};
use par_shot::{
    CaptureError, CaptureFailure, CaptureMode, CaptureTarget, CaretToggle, Config, GutterSide,
    GutterView, ScreenshotEngine, SelectionSpan, SourceView, ViewError,
};

const INDENTED: &str = "    aaa\n    bbbb\n    cc";
const FIVE: &str = "a\nb\nc\nd\ne";
const FIVE_CHANGED: &str = "a\nX\nY\nd\ne";

fn engine() -> ScreenshotEngine {
    ScreenshotEngine::default()
}

#[test]
fn test_document_capture_size() {
    let view = TextView::new("abc\ndef");
    let shot = engine().capture(CaptureTarget::Editor(&view)).unwrap();

    assert_eq!(shot.mode, CaptureMode::Document);
    assert_eq!(shot.image.width() as i32, view.content_preferred_width());
    assert_eq!(shot.image.height() as i32, 2 * LINE);
    assert_eq!(shot.file_stem, "screenshot");
}

#[test]
fn test_single_line_selection_size() {
    let view = TextView::new(INDENTED).with_selection(8, 16);
    let config = Config::default().with_include_gutter(false);
    let shot = ScreenshotEngine::from_config(&config)
        .capture(CaptureTarget::Editor(&view))
        .unwrap();

    assert_eq!(shot.mode, CaptureMode::Selection);
    let padding = config.selection_padding as i32;
    assert_eq!(shot.image.width() as i32, 8 * CELL - 4 * CELL + padding);
    assert_eq!(shot.image.height() as i32, LINE);
}

#[test]
fn test_selection_capture_paints_selected_rows() {
    let view = TextView::new(INDENTED).with_selection(8, 16);
    let config = Config::default().with_include_gutter(false);
    let image = ScreenshotEngine::from_config(&config)
        .capture_view(&view)
        .unwrap();

    let theme = TextTheme::default();
    // First 'b' of line 1 sits at column 4, which the trim moves to x = 0
    assert_eq!(pixel(&image, 4, 8), theme.foreground);
    // Past the line end: background
    assert_eq!(pixel(&image, (4 * CELL + 4) as u32, 8), theme.background);
}

#[test]
fn test_gutter_is_composited_beside_content() {
    let view = TextView::new(INDENTED).with_gutter(GutterSide::Left);
    let image = engine().capture_view(&view).unwrap();
    let gutter_width = view.gutter().unwrap().preferred_width();

    assert_eq!(
        image.width() as i32,
        gutter_width + view.content_preferred_width()
    );
    let theme = TextTheme::default();
    assert_eq!(pixel(&image, 0, 0), theme.gutter_background);
    assert_eq!(pixel(&image, gutter_width as u32, 0), theme.background);
}

#[test]
fn test_right_gutter_is_composited_after_content() {
    let view = TextView::new(INDENTED).with_gutter(GutterSide::Right);
    let image = engine().capture_view(&view).unwrap();
    let content_width = view.content_preferred_width() as u32;

    let theme = TextTheme::default();
    assert_eq!(pixel(&image, 0, 0), theme.background);
    assert_eq!(pixel(&image, content_width, 0), theme.gutter_background);
}

#[test]
fn test_selection_and_caret_are_not_painted() {
    let view = TextView::new(INDENTED).with_selection(0, 16);
    let theme = TextTheme::default();

    // Painting the live view shows both
    let mut canvas = Canvas::new(100, 48).unwrap();
    view.paint(&mut canvas).unwrap();
    let live = canvas.into_image();
    assert!(count_color(&live, theme.selection) > 0);
    assert!(count_color(&live, theme.caret) > 0);

    let image = engine().capture_view(&view).unwrap();
    assert_eq!(count_color(&image, theme.selection), 0);
    assert_eq!(count_color(&image, theme.caret), 0);
}

#[test]
fn test_selection_and_caret_restored_after_capture() {
    let view = TextView::new(INDENTED).with_selection(8, 16);
    engine().capture(CaptureTarget::Editor(&view)).unwrap();

    assert_eq!(view.selection(), Some(SelectionSpan::new(8, 16)));
    assert!(view.caret_is_visible());
}

#[test]
fn test_hidden_caret_stays_hidden() {
    let view = TextView::new("abc");
    view.caret_toggle().unwrap().set_caret_visible(false).unwrap();
    engine().capture_view(&view).unwrap();
    assert!(!view.caret_is_visible());
}

#[test]
fn test_unreadable_caret_restores_to_visible() {
    let view = TextView::new("abc").with_unreadable_caret();
    view.caret_toggle().unwrap().set_caret_visible(false).unwrap();
    engine().capture_view(&view).unwrap();
    assert!(view.caret_is_visible());
}

#[test]
fn test_caret_model_toggle_is_used_as_fallback() {
    let view = TextView::new("abc").with_caret_access(CaretAccess::Model);
    let image = engine().capture_view(&view).unwrap();
    assert_eq!(count_color(&image, TextTheme::default().caret), 0);
    assert!(view.caret_is_visible());
}

#[test]
fn test_view_without_caret_switch_still_captures() {
    let view = TextView::new("abc").with_caret_access(CaretAccess::None);
    assert!(engine().capture_view(&view).is_ok());
}

#[test]
fn test_state_restored_when_paint_fails() {
    let view = FailingView::new(TextView::new(INDENTED).with_selection(8, 16)).failing_paint();
    let result = engine().capture(CaptureTarget::Editor(&view));

    match result {
        Err(CaptureError::Failed(CaptureFailure::Render(RenderError::Paint { region, .. }))) => {
            assert_eq!(region, "content");
        }
        other => panic!("expected paint failure, got {other:?}"),
    }
    assert_eq!(view.selection(), Some(SelectionSpan::new(8, 16)));
    assert_eq!(view.set_selection_calls.get(), 1);
    assert!(view.inner.caret_is_visible());
}

#[test]
fn test_metrics_failure_leaves_selection_untouched() {
    let view = FailingView::new(TextView::new(INDENTED).with_selection(8, 16)).failing_metrics();
    let result = engine().capture_view(&view);

    assert!(matches!(
        result,
        Err(CaptureError::Failed(CaptureFailure::View(ViewError::Host(_))))
    ));
    assert_eq!(view.selection(), Some(SelectionSpan::new(8, 16)));
    assert_eq!(view.set_selection_calls.get(), 0);
    assert!(view.inner.caret_is_visible());
}

#[test]
fn test_zero_size_capture_is_an_error() {
    let view = TextView::new("abc").with_selection(0, 0);
    let config = Config::default()
        .with_include_gutter(false)
        .with_selection_padding(0);
    let result = ScreenshotEngine::from_config(&config).capture_view(&view);

    assert!(matches!(
        result,
        Err(CaptureError::Failed(CaptureFailure::Render(
            RenderError::EmptyRaster { .. }
        )))
    ));
    assert_eq!(view.selection(), Some(SelectionSpan::new(0, 0)));
}

#[test]
fn test_selection_inside_indentation_still_captures() {
    let view = TextView::new("        x\nabc").with_selection(0, 2);
    let config = Config::default().with_include_gutter(false);
    let image = ScreenshotEngine::from_config(&config)
        .capture_view(&view)
        .unwrap();
    assert_eq!((image.width() as i32, image.height() as i32), (24, LINE));
    assert_eq!(view.selection(), Some(SelectionSpan::new(0, 2)));
}

#[test]
fn test_no_active_view() {
    let result = engine().capture(CaptureTarget::None);
    let err = result.unwrap_err();
    assert!(matches!(err, CaptureError::NoActiveView));
    assert_eq!(
        err.to_string(),
        "Screenshotting code is only available in an editor"
    );
}

#[test]
fn test_file_stem_drops_directories() {
    let view = TextView::new("abc").with_file_name("/work/src/main.rs");
    let shot = engine().capture(CaptureTarget::Editor(&view)).unwrap();
    assert_eq!(shot.file_stem, "main.rs");
}

#[test]
fn test_dual_pane_aligned_change() {
    let viewer = TextDiffViewer::new(TextView::new(FIVE), TextView::new(FIVE_CHANGED))
        .with_align_changes(true);
    assert_eq!(
        viewer.changes(),
        vec![DiffChangeSpan::new((1, 3), (1, 3), ChangeType::Modified)]
    );

    let shot = engine()
        .capture(CaptureTarget::Diff {
            viewer: &viewer,
            focused: DiffSide::Left,
        })
        .unwrap();
    assert_eq!(shot.mode, CaptureMode::DualPane);

    let pane = viewer.left().content_preferred_width() as u32;
    let divider = viewer.divider_width();
    assert_eq!(shot.image.width(), pane + divider + pane);
    assert_eq!(shot.image.height() as i32, 5 * LINE);

    let config = Config::default();
    let band = opaque(config.diff_colors.modified);
    let background = opaque(config.diff_colors.divider_background);
    // Band covers rows 1 and 2 across the whole divider
    for x in [pane, pane + divider / 2, pane + divider - 1] {
        assert_eq!(pixel(&shot.image, x, LINE as u32), band);
        assert_eq!(pixel(&shot.image, x, (3 * LINE - 1) as u32), band);
        assert_eq!(pixel(&shot.image, x, (LINE / 2) as u32), background);
        assert_eq!(pixel(&shot.image, x, (3 * LINE) as u32), background);
    }
}

#[test]
fn test_dual_pane_fills_gap_with_focused_background() {
    let red = Rgba([200, 0, 0, 255]);
    let right_theme = TextTheme {
        background: red,
        ..TextTheme::default()
    };
    let viewer = TextDiffViewer::new(
        TextView::new("a\nb"),
        TextView::new(FIVE).with_theme(right_theme),
    );

    let shot = engine()
        .capture(CaptureTarget::Diff {
            viewer: &viewer,
            focused: DiffSide::Right,
        })
        .unwrap();
    assert_eq!(shot.image.height() as i32, 5 * LINE);
    // Below the two-line left pane
    assert_eq!(pixel(&shot.image, 0, (4 * LINE) as u32), red);
}

#[test]
fn test_zero_width_divider_joins_panes() {
    let viewer =
        TextDiffViewer::new(TextView::new(FIVE), TextView::new(FIVE_CHANGED)).with_divider_width(0);
    let shot = engine()
        .capture(CaptureTarget::Diff {
            viewer: &viewer,
            focused: DiffSide::Left,
        })
        .unwrap();
    let pane = viewer.left().content_preferred_width() as u32;
    assert_eq!(shot.image.width(), 2 * pane);
}

#[test]
fn test_diff_with_selection_captures_focused_pane_only() {
    let viewer = TextDiffViewer::new(
        TextView::new(INDENTED),
        TextView::new(INDENTED).with_selection(8, 16),
    );
    let target = CaptureTarget::Diff {
        viewer: &viewer,
        focused: DiffSide::Right,
    };
    assert!(!target.is_dual_pane());

    let shot = engine().capture(target).unwrap();
    assert_eq!(shot.mode, CaptureMode::Selection);
    assert_eq!(shot.image.height() as i32, LINE);
    assert_eq!(
        viewer.right().selection(),
        Some(SelectionSpan::new(8, 16))
    );
}

#[test]
fn test_diff_without_selection_is_dual_pane() {
    let viewer = TextDiffViewer::new(TextView::new(FIVE), TextView::new(FIVE));
    let target = CaptureTarget::Diff {
        viewer: &viewer,
        focused: DiffSide::Left,
    };
    assert!(target.is_dual_pane());
}

#[test]
fn test_dual_pane_keeps_gutters() {
    let viewer = TextDiffViewer::new(
        TextView::new(FIVE).with_gutter(GutterSide::Left),
        TextView::new(FIVE).with_gutter(GutterSide::Left),
    );
    let shot = engine()
        .capture(CaptureTarget::Diff {
            viewer: &viewer,
            focused: DiffSide::Left,
        })
        .unwrap();
    let gutter = viewer.left().gutter().unwrap().preferred_width() as u32;
    let pane = gutter + viewer.left().content_preferred_width() as u32;
    assert_eq!(shot.image.width(), 2 * pane + viewer.divider_width());
    assert_eq!(
        pixel(&shot.image, pane + viewer.divider_width(), 0),
        TextTheme::default().gutter_background
    );
}
