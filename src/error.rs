// src/error.rs
use folio_core::ParseError;
use folio_idf::IdfError;
use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// The only message an export failure ever shows to a user.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to generate PDF. Please try again.";

/// Internal errors of the export pipeline. These carry the detail that gets
/// logged; callers of [`ExportPipeline`](crate::ExportPipeline) see [`ExportError`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Content parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Content tree could not be read: {0}")]
    Idf(#[from] IdfError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A failed export. Every variant displays [`EXPORT_FAILED_MESSAGE`]; the
/// underlying cause, if any, is available through `source()`.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No artifact sink is configured, so there is nowhere to emit the PDF.
    #[error("Failed to generate PDF. Please try again.")]
    Environment,

    /// The rendered content root was not supplied.
    #[error("Failed to generate PDF. Please try again.")]
    MissingContent,

    #[error("Failed to generate PDF. Please try again.")]
    Render(#[source] PipelineError),
}

impl From<PipelineError> for ExportError {
    fn from(e: PipelineError) -> Self {
        ExportError::Render(e)
    }
}
