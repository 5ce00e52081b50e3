//! Clipboard and file delivery, status messages and action presentation.

mod common;

use common::{quiet_config, saving_config};
use par_shot::action::{LABEL_ALL, LABEL_DIFF, LABEL_SELECTED, Presentation};
use par_shot::delivery::{ClipboardSink, ENABLE_DESTINATION_HINT, deliver_with};
use par_shot::diff::DiffSide;
use par_shot::host::{TextDiffViewer, TextView};
use par_shot::render::RgbaImage;
use par_shot::{CaptureMode, CaptureTarget, Config, Screenshot};

#[derive(Default)]
struct RecordingClipboard {
    images: Vec<(u32, u32)>,
    fail: bool,
}

impl ClipboardSink for RecordingClipboard {
    fn set_image(&mut self, image: &RgbaImage) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.images.push((image.width(), image.height()));
        Ok(())
    }
}

fn screenshot() -> Screenshot {
    Screenshot {
        image: RgbaImage::from_pixel(12, 7, par_shot::render::Rgba([10, 20, 30, 255])),
        mode: CaptureMode::Document,
        file_stem: "main.rs".to_string(),
    }
}

#[test]
fn test_clipboard_only() {
    let config = quiet_config().with_clipboard(true);
    let mut clipboard = RecordingClipboard::default();
    let report = deliver_with(&screenshot(), &config, &mut clipboard);

    assert!(report.copied);
    assert!(report.saved_path.is_none());
    assert!(report.is_success());
    assert_eq!(clipboard.images, vec![(12, 7)]);
    assert_eq!(report.message(), "Copied to clipboard.");
}

#[test]
fn test_save_only_writes_png() {
    let (config, temp_dir) = saving_config();
    let mut clipboard = RecordingClipboard::default();
    let report = deliver_with(&screenshot(), &config, &mut clipboard);

    let path = report.saved_path.clone().expect("screenshot saved");
    assert!(path.starts_with(temp_dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("main.rs_"));
    assert!(name.ends_with(".png"));
    assert!(clipboard.images.is_empty());
    assert_eq!(report.message(), format!("Saved to: \n{name}"));

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (12, 7));
    assert_eq!(decoded.get_pixel(3, 3).0, [10, 20, 30, 255]);
}

#[test]
fn test_save_creates_missing_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");
    let config = quiet_config()
        .with_save(true)
        .with_output_dir(nested.display().to_string());
    let report = deliver_with(&screenshot(), &config, &mut RecordingClipboard::default());

    assert!(nested.is_dir());
    assert!(report.saved_path.is_some_and(|p| p.exists()));
}

#[test]
fn test_clipboard_and_save() {
    let (config, _temp_dir) = saving_config();
    let config = config.with_clipboard(true);
    let report = deliver_with(&screenshot(), &config, &mut RecordingClipboard::default());

    let name = report
        .saved_path
        .as_deref()
        .and_then(|p| p.file_name())
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert_eq!(
        report.message(),
        format!("Copied to clipboard and saved to:\n{name}")
    );
}

#[test]
fn test_clipboard_failure_still_saves() {
    let (config, _temp_dir) = saving_config();
    let config = config.with_clipboard(true);
    let mut clipboard = RecordingClipboard {
        fail: true,
        ..RecordingClipboard::default()
    };
    let report = deliver_with(&screenshot(), &config, &mut clipboard);

    assert!(!report.copied);
    assert!(report.saved_path.is_some());
    assert!(report.is_success());
    assert_eq!(report.errors.len(), 1);
    assert!(report.message().starts_with("Saved to:"));
}

#[test]
fn test_save_failure_is_reported() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    // A regular file where the output directory should be
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();
    let config = quiet_config()
        .with_save(true)
        .with_output_dir(blocker.display().to_string());

    let report = deliver_with(&screenshot(), &config, &mut RecordingClipboard::default());
    assert!(!report.is_success());
    assert_eq!(report.errors.len(), 1);
    assert!(report.message().starts_with("Failed to deliver screenshot:"));
}

#[test]
fn test_no_destination_reports_hint() {
    let report = deliver_with(
        &screenshot(),
        &quiet_config(),
        &mut RecordingClipboard::default(),
    );
    assert!(!report.is_success());
    assert_eq!(report.message(), ENABLE_DESTINATION_HINT);
}

#[test]
fn test_presentation_disabled_without_destination() {
    let view = TextView::new("abc");
    let presentation = Presentation::for_target(&CaptureTarget::Editor(&view), &quiet_config());
    assert!(!presentation.enabled);
    assert_eq!(presentation.hint, Some(ENABLE_DESTINATION_HINT));
}

#[test]
fn test_presentation_labels() {
    let config = Config::default().with_clipboard(true);

    let plain = TextView::new("abc");
    let selected = TextView::new("abc").with_selection(0, 2);
    let viewer = TextDiffViewer::new(TextView::new("a"), TextView::new("b"));

    let label = |target: CaptureTarget<'_>| Presentation::for_target(&target, &config).label;
    assert_eq!(label(CaptureTarget::Editor(&plain)), LABEL_ALL);
    assert_eq!(label(CaptureTarget::Editor(&selected)), LABEL_SELECTED);
    assert_eq!(
        label(CaptureTarget::Diff {
            viewer: &viewer,
            focused: DiffSide::Left,
        }),
        LABEL_DIFF
    );
    assert!(Presentation::for_target(&CaptureTarget::Editor(&plain), &config).enabled);
}
