//! Typed error types for par-shot-render.
//!
//! Callers at the crate boundary can match on specific variants instead of
//! relying on opaque `anyhow` strings.

use thiserror::Error;

/// Error type for raster composition.
///
/// Covers the failure categories callers may want to distinguish:
/// - Destination raster sizing
/// - Paint callbacks supplied by the host view
/// - Divider rendering
#[derive(Debug, Error)]
pub enum RenderError {
    // -----------------------------------------------------------------------
    // Raster sizing
    // -----------------------------------------------------------------------
    /// The destination raster would have no pixels.
    #[error("Cannot create an empty raster ({width}x{height})")]
    EmptyRaster {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The requested raster is larger than the image buffer can address.
    #[error("Raster too large: {width}x{height}")]
    RasterTooLarge {
        /// Requested width in pixels.
        width: u64,
        /// Requested height in pixels.
        height: u64,
    },

    // -----------------------------------------------------------------------
    // Painting
    // -----------------------------------------------------------------------
    /// A region's paint capability reported a failure.
    #[error("Paint failed for {region}: {details}")]
    Paint {
        /// Which region was being painted (e.g. `content`, `gutter`).
        region: String,
        /// Human-readable failure details from the host.
        details: String,
    },

    // -----------------------------------------------------------------------
    // Divider
    // -----------------------------------------------------------------------
    /// A line position for the divider could not be resolved.
    #[error("Divider line lookup failed for line {line}: {details}")]
    LineLookup {
        /// Zero-based document line.
        line: usize,
        /// Human-readable failure details.
        details: String,
    },
}

impl RenderError {
    /// Convenience constructor for host paint failures
    pub fn paint(region: impl Into<String>, details: impl std::fmt::Display) -> Self {
        RenderError::Paint {
            region: region.into(),
            details: details.to_string(),
        }
    }
}
