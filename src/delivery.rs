//! Hands finished screenshots to the clipboard and the file system.

use crate::capture::Screenshot;
use anyhow::{Context, Result};
use image::RgbaImage;
use par_shot_config::Config;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Shown when neither destination is enabled
pub const ENABLE_DESTINATION_HINT: &str =
    "Please enable Clipboard or set an Output directory in Settings.";

/// Destination for clipboard copies
pub trait ClipboardSink {
    fn set_image(&mut self, image: &RgbaImage) -> Result<()>;
}

/// The system clipboard via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_image(&mut self, image: &RgbaImage) -> Result<()> {
        copy_to_clipboard(image)
    }
}

/// Put an RGBA raster on the system clipboard
pub fn copy_to_clipboard(image: &RgbaImage) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_image(arboard::ImageData {
            width: image.width() as usize,
            height: image.height() as usize,
            bytes: std::borrow::Cow::Borrowed(image.as_raw()),
        })
        .context("Failed to copy image to clipboard")?;
    Ok(())
}

/// Format the current local time, falling back to the default pattern when
/// `format` is not a valid strftime string
pub fn timestamp(format: &str) -> String {
    let now = chrono::Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_ok() && !out.is_empty() {
        return out;
    }
    log::warn!("Invalid timestamp format {format:?}, using default");
    now.format(&par_shot_config::defaults::file_timestamp_format())
        .to_string()
}

/// `<stem>_<timestamp>.png`
pub fn screenshot_file_name(stem: &str, timestamp: &str) -> String {
    format!("{stem}_{timestamp}.png")
}

/// Write `image` as PNG into `dir`, creating the directory when needed
pub fn save_to_disk(
    image: &RgbaImage,
    dir: &Path,
    stem: &str,
    timestamp_format: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create screenshot directory {}", dir.display()))?;

    let path = dir.join(screenshot_file_name(stem, &timestamp(timestamp_format)));
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Screenshot saved to: {}", path.display());
    Ok(path)
}

/// Outcome of delivering one screenshot
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub copied: bool,
    pub saved_path: Option<PathBuf>,
    pub errors: Vec<String>,
}

impl DeliveryReport {
    /// At least one destination received the image
    pub fn is_success(&self) -> bool {
        self.copied || self.saved_path.is_some()
    }

    /// User-facing notification text
    pub fn message(&self) -> String {
        let file_name = self
            .saved_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned());

        match (self.copied, file_name) {
            (true, Some(name)) => format!("Copied to clipboard and saved to:\n{name}"),
            (true, None) => "Copied to clipboard.".to_string(),
            (false, Some(name)) => format!("Saved to: \n{name}"),
            (false, None) => match self.errors.first() {
                Some(error) => format!("Failed to deliver screenshot: {error}"),
                None => ENABLE_DESTINATION_HINT.to_string(),
            },
        }
    }
}

/// Deliver to the system clipboard and/or disk according to `config`
pub fn deliver(screenshot: &Screenshot, config: &Config) -> DeliveryReport {
    deliver_with(screenshot, config, &mut SystemClipboard)
}

/// Deliver with an explicit clipboard sink
pub fn deliver_with(
    screenshot: &Screenshot,
    config: &Config,
    clipboard: &mut dyn ClipboardSink,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    if config.clipboard {
        match clipboard.set_image(&screenshot.image) {
            Ok(()) => {
                log::info!("Screenshot copied to clipboard");
                report.copied = true;
            }
            Err(e) => {
                log::error!("Clipboard copy failed: {e:#}");
                report.errors.push(format!("{e:#}"));
            }
        }
    }

    if config.save {
        match save_to_disk(
            &screenshot.image,
            &config.resolved_output_dir(),
            &screenshot.file_stem,
            &config.file_timestamp_format,
        ) {
            Ok(path) => report.saved_path = Some(path),
            Err(e) => {
                log::error!("Failed to save screenshot: {e:#}");
                report.errors.push(format!("{e:#}"));
            }
        }
    }

    report
}
