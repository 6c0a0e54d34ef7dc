use thiserror::Error;

/// Failures of a [`crate::PdfSurface`]. An `Image` error is recoverable by the
/// caller; the others abort the document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to build PDF document: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image could not be embedded: {0}")]
    Image(String),
}
