// src/pipeline/orchestrator.rs
use super::config::PipelineConfig;
use super::filename::sanitize_filename;
use super::sink::ArtifactSink;
use crate::error::{ExportError, PipelineError};
use folio_idf::ContentNode;
use folio_layout::{LayoutSummary, render_tree};
use folio_render_core::{DocumentInfo, PdfSurface};
use folio_render_lopdf::LopdfSurface;
use folio_style::ExportOptions;
use folio_traits::ResourceProvider;
use folio_types::Document;
use std::sync::Arc;
use std::time::Instant;

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub filename: String,
    pub pages: usize,
    pub bytes: usize,
}

/// Lays out content trees, saves them as PDF and emits the result to a sink.
///
/// Each export owns its render context and surface; nothing is shared between
/// concurrent exports except the read-only resource provider and the sink.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    config: PipelineConfig,
    resources: Arc<dyn ResourceProvider>,
    sink: Option<Arc<dyn ArtifactSink>>,
}

impl ExportPipeline {
    pub fn new(
        config: PipelineConfig,
        resources: Arc<dyn ResourceProvider>,
        sink: Option<Arc<dyn ArtifactSink>>,
    ) -> Self {
        Self {
            config,
            resources,
            sink,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn resources(&self) -> &dyn ResourceProvider {
        self.resources.as_ref()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Exports a pre-rendered content tree with the pipeline's options.
    pub async fn export<N: ContentNode>(
        &self,
        doc: &Document,
        root: Option<&N>,
    ) -> Result<ExportSummary, ExportError> {
        self.export_with_options(doc, root, &self.config.options).await
    }

    pub async fn export_with_options<N: ContentNode>(
        &self,
        doc: &Document,
        root: Option<&N>,
        options: &ExportOptions,
    ) -> Result<ExportSummary, ExportError> {
        let mut surface = LopdfSurface::from_geometry(&options.page_width.geometry());
        self.export_onto(doc, root, options, &mut surface).await
    }

    /// Converts the document's own sections to a content tree and exports it.
    pub async fn export_document(&self, doc: &Document) -> Result<ExportSummary, ExportError> {
        let root = folio_core::render_document(doc).map_err(|e| {
            log::error!("PDF export of '{}' failed: {}", doc.title, e);
            ExportError::Render(e.into())
        })?;
        self.export(doc, Some(&root)).await
    }

    /// Runs one export against a caller-supplied surface.
    pub async fn export_onto<N, S>(
        &self,
        doc: &Document,
        root: Option<&N>,
        options: &ExportOptions,
        surface: &mut S,
    ) -> Result<ExportSummary, ExportError>
    where
        N: ContentNode,
        S: PdfSurface + ?Sized,
    {
        let Some(sink) = self.sink.as_deref() else {
            log::error!("PDF export of '{}' failed: no artifact sink configured", doc.title);
            return Err(ExportError::Environment);
        };
        let Some(root) = root else {
            log::error!("PDF export of '{}' failed: content root is missing", doc.title);
            return Err(ExportError::MissingContent);
        };

        let start = Instant::now();
        let filename = sanitize_filename(&doc.title);
        log::info!(
            "Exporting '{}' as {} ({} page width, {:?})",
            doc.title,
            filename,
            options.page_width,
            options.font_family
        );

        let result = self
            .render(doc, root, options, surface)
            .and_then(|(bytes, layout)| {
                sink.emit(&filename, &bytes)?;
                Ok(ExportSummary {
                    filename: filename.clone(),
                    pages: layout.pages,
                    bytes: bytes.len(),
                })
            });

        match result {
            Ok(summary) => {
                log::info!(
                    "Exported {} ({} pages, {} bytes) in {:.2?}",
                    summary.filename,
                    summary.pages,
                    summary.bytes,
                    start.elapsed()
                );
                Ok(summary)
            }
            Err(e) => {
                log::error!("PDF export of '{}' failed: {}", doc.title, e);
                Err(ExportError::Render(e))
            }
        }
    }

    fn render<N, S>(
        &self,
        doc: &Document,
        root: &N,
        options: &ExportOptions,
        surface: &mut S,
    ) -> Result<(Vec<u8>, LayoutSummary), PipelineError>
    where
        N: ContentNode,
        S: PdfSurface + ?Sized,
    {
        let layout = render_tree(root, options, surface, self.resources.as_ref())?;
        let info = DocumentInfo {
            title: doc.title.clone(),
            producer: self.config.producer.clone(),
        };
        let bytes = surface.save(&info)?;
        Ok((bytes, layout))
    }
}

/// One-shot export of a rendered content tree to `sink`, with `data:` URLs as
/// the only image source.
pub async fn export_to_pdf<N: ContentNode>(
    doc: &Document,
    root: Option<&N>,
    options: &ExportOptions,
    sink: Arc<dyn ArtifactSink>,
) -> Result<ExportSummary, ExportError> {
    let pipeline = ExportPipeline::new(
        PipelineConfig {
            options: *options,
            ..PipelineConfig::default()
        },
        Arc::new(folio_resource::DataUrlResourceProvider::new(
            folio_traits::InMemoryResourceProvider::new(),
        )),
        Some(sink),
    );
    pipeline.export(doc, root).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{MemorySink, PipelineBuilder};
    use folio_idf::DomNode;
    use folio_render_core::RecordingSurface;

    fn content() -> DomNode {
        DomNode::element("div")
            .with_child(DomNode::element("h1").with_text("Hello"))
            .with_child(DomNode::element("p").with_text("World"))
    }

    fn pipeline(sink: &Arc<MemorySink>) -> ExportPipeline {
        PipelineBuilder::new()
            .with_sink(Arc::clone(sink))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_export_emits_named_pdf() {
        let _ = env_logger::builder().is_test(true).try_init();
        let sink = Arc::new(MemorySink::new());
        let doc = Document::new("Test Document: 2025/Report");
        let summary = pipeline(&sink).export(&doc, Some(&content())).await.unwrap();

        assert_eq!(summary.filename, "Test_Document_2025_Report.pdf");
        assert_eq!(summary.pages, 1);
        let artifact = sink.last().unwrap();
        assert_eq!(artifact.filename, summary.filename);
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_missing_root_is_an_input_error() {
        let sink = Arc::new(MemorySink::new());
        let doc = Document::new("Doc");
        let err = pipeline(&sink).export::<DomNode>(&doc, None).await.unwrap_err();
        assert!(matches!(err, ExportError::MissingContent));
        assert!(sink.artifacts().is_empty());
    }

    #[tokio::test]
    async fn test_missing_sink_is_an_environment_error() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        let err = pipeline
            .export(&Document::new("Doc"), Some(&content()))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Environment));
    }

    #[tokio::test]
    async fn test_layout_failure_is_wrapped() {
        let sink = Arc::new(MemorySink::new());
        let mut deep = DomNode::element("p").with_text("x");
        for _ in 0..400 {
            deep = DomNode::element("div").with_child(deep);
        }
        let err = pipeline(&sink)
            .export(&Document::new("Deep"), Some(&deep))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Render(PipelineError::Layout(_))));
        assert_eq!(err.to_string(), crate::EXPORT_FAILED_MESSAGE);
        assert!(sink.artifacts().is_empty());
    }

    #[tokio::test]
    async fn test_image_failure_still_saves() {
        let sink = Arc::new(MemorySink::new());
        let root = DomNode::element("div")
            .with_child(DomNode::element("img").with_attr("src", "data:image/png;base64,AAAA"))
            .with_child(DomNode::element("p").with_text("after"));
        let mut surface = RecordingSurface::failing_images();
        let doc = Document::new("Images");
        pipeline(&sink)
            .export_onto(&doc, Some(&root), &ExportOptions::default(), &mut surface)
            .await
            .unwrap();

        assert!(surface.text_strings().contains(&"[Image]"));
        assert_eq!(surface.saved().unwrap().title, "Images");
        assert_eq!(sink.artifacts().len(), 1);
    }

    #[tokio::test]
    async fn test_export_document_uses_sections() {
        let sink = Arc::new(MemorySink::new());
        let mut doc = Document::new("Report");
        doc.sections.push(folio_types::Section::new("Introduction"));
        let summary = pipeline(&sink).export_document(&doc).await.unwrap();
        assert_eq!(summary.filename, "Report.pdf");
    }

    #[tokio::test]
    async fn test_free_function() {
        let sink: Arc<MemorySink> = Arc::new(MemorySink::new());
        let summary = export_to_pdf(
            &Document::new("Free"),
            Some(&content()),
            &ExportOptions::default(),
            sink.clone(),
        )
        .await
        .unwrap();
        assert_eq!(summary.filename, "Free.pdf");
        assert_eq!(sink.artifacts().len(), 1);
    }
}
