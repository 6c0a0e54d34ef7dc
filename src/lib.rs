//! # folio
//!
//! Exports annual-report style documents to paginated PDF.
//!
//! The workspace is split the same way the export flows:
//! - **outline**: the two-level section hierarchy (`folio-outline`)
//! - **content**: editor rich content to content trees (`folio-core`)
//! - **layout**: block renderers and pagination (`folio-layout`)
//! - **render**: the PDF surface (`folio-render-lopdf`)
//!
//! This crate ties them together in [`ExportPipeline`], which lays out a
//! content tree, saves the PDF and hands it to an [`ArtifactSink`] under a
//! filename derived from the document title.

// Re-export workspace crates
pub use folio_core as content;
pub use folio_idf as idf;
pub use folio_layout as layout;
pub use folio_outline as outline;
pub use folio_render_core as render;
pub use folio_resource as resource;
pub use folio_style as style;
pub use folio_types as types;

pub mod error;
pub mod pipeline;

pub use error::{EXPORT_FAILED_MESSAGE, ExportError, PipelineError};
pub use pipeline::{
    ArtifactSink, DirectorySink, ExportArtifact, ExportPipeline, ExportSummary, MemorySink,
    PipelineBuilder, PipelineConfig, export_to_pdf, sanitize_filename,
};

// Commonly used types
pub use folio_idf::{ContentNode, DomNode};
pub use folio_style::{ExportOptions, FontFamily, PageWidth};
pub use folio_types::{Document, Section};
