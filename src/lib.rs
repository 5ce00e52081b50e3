// Library exports for testing and embedding in other hosts.
//
// The engine talks to editors only through the traits in `view` and `diff`;
// `host` is an in-memory implementation used by the CLI and the tests.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod action;
pub mod capture;
pub mod caret_guard;
pub mod cli;
pub mod delivery;
pub mod diff;
pub mod error;
pub mod geometry;
pub mod host;
pub mod metrics;
pub mod runner;
pub mod selection_crop;
pub mod selection_guard;
pub mod view;

pub use capture::{CaptureMode, CaptureTarget, Screenshot, ScreenshotEngine};
pub use error::{CaptureError, CaptureFailure};
pub use geometry::{GutterSide, RegionGeometryResolver, ResolvedRegions};
pub use view::{CaretToggle, GutterView, Point, SelectionSpan, SourceView, ViewError};

// Re-export the config and render crates for downstream users
pub use par_shot_config::Config;
pub use par_shot_render as render;
