//! Reference host: an in-memory monospace editor that implements the view
//! traits, used by the command-line front end and the tests.

mod diff_viewer;
mod gutter;
pub mod layout;
mod line_diff;
mod text_view;

pub use diff_viewer::{DEFAULT_DIVIDER_WIDTH, TextDiffViewer};
pub use gutter::{GutterRow, TextGutter};
pub use layout::CellMetrics;
pub use line_diff::{MAX_LCS_LINES, diff_lines};
pub use text_view::{CaretAccess, CaretState, TextTheme, TextView};
