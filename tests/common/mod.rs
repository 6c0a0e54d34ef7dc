pub mod fixtures;
pub mod pdf_assertions;

use folio::{
    ContentNode, Document, ExportError, ExportOptions, ExportSummary, MemorySink, PipelineBuilder,
};
use lopdf::Document as LopdfDocument;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { filename, bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Exports a pre-rendered content tree and loads the result.
pub async fn export_tree<N: ContentNode>(
    title: &str,
    root: &N,
    options: ExportOptions,
) -> Result<(ExportSummary, GeneratedPdf), Box<dyn std::error::Error>> {
    init_logging();
    let sink = Arc::new(MemorySink::new());
    let pipeline = PipelineBuilder::new()
        .with_options(options)
        .with_sink(Arc::clone(&sink))
        .build()?;
    let summary = pipeline.export(&Document::new(title), Some(root)).await?;
    let artifact = sink.last().ok_or("no artifact emitted")?;
    let pdf = GeneratedPdf::from_bytes(artifact.filename, artifact.bytes)?;
    Ok((summary, pdf))
}

/// Exports a document's own sections and loads the result.
#[allow(dead_code)]
pub async fn export_document(
    doc: &Document,
    options: ExportOptions,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logging();
    let sink = Arc::new(MemorySink::new());
    let pipeline = PipelineBuilder::new()
        .with_options(options)
        .with_sink(Arc::clone(&sink))
        .build()?;
    pipeline.export_document(doc).await?;
    let artifact = sink.last().ok_or("no artifact emitted")?;
    GeneratedPdf::from_bytes(artifact.filename, artifact.bytes)
}

#[allow(dead_code)]
pub fn is_generic_failure(err: &ExportError) -> bool {
    err.to_string() == folio::EXPORT_FAILED_MESSAGE
}
