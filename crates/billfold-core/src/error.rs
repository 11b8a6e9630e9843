// SPDX-License-Identifier: MIT
//
// Unified error types for Billfold.

use thiserror::Error;

/// Top-level error type for all Billfold operations.
///
/// Image-fetch failures never appear here — the provider degrades to an
/// invalid-image flag and the render continues. Only canvas construction and
/// output-sink failures cross component boundaries as errors.
#[derive(Debug, Error)]
pub enum BillfoldError {
    // -- Rendering errors --
    #[error("canvas operation failed: {0}")]
    Canvas(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("image decode failed: {0}")]
    ImageDecode(String),

    // -- Output sink --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BillfoldError>;
