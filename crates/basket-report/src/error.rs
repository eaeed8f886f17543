//! Error types for report generation.

use thiserror::Error;

/// Report generation errors.
///
/// Rendering never degrades to an empty document: any failure here reaches
/// the caller, which decides how to surface it.
#[derive(Debug, Error)]
pub enum ReportError {
    /// lopdf rejected a content stream or the document structure.
    #[error("PDF encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Writing the serialized document failed.
    #[error("Failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
