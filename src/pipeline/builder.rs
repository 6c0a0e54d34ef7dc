// src/pipeline/builder.rs
use super::config::PipelineConfig;
use super::orchestrator::ExportPipeline;
use super::sink::{ArtifactSink, DirectorySink};
use crate::error::PipelineError;
use folio_resource::{DataUrlResourceProvider, FilesystemResourceProvider};
use folio_style::{ExportOptions, FontFamily, PageWidth};
use folio_traits::{InMemoryResourceProvider, ResourceProvider};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an [`ExportPipeline`].
///
/// Image sources are always resolved through a `data:` URL decoder first; the
/// configured provider (a resource directory, a custom provider, or nothing)
/// handles everything else.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    resources: Option<Arc<dyn ResourceProvider>>,
    sink: Option<Arc<dyn ArtifactSink>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.config.options = options;
        self
    }

    pub fn with_page_width(mut self, page_width: PageWidth) -> Self {
        self.config.options.page_width = page_width;
        self
    }

    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.config.options.font_family = font_family;
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.config.producer = producer.into();
        self
    }

    pub fn with_resource_provider<P: ResourceProvider + 'static>(mut self, provider: P) -> Self {
        self.resources = Some(Arc::new(provider));
        self
    }

    /// Resolves relative image paths under `path`. Fails if `path` is not a directory.
    pub fn with_resource_dir<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(PipelineError::Config(format!(
                "Resource directory '{}' does not exist",
                path.display()
            )));
        }
        self.resources = Some(Arc::new(FilesystemResourceProvider::new(path)));
        Ok(self)
    }

    /// Writes exported files into `path`.
    pub fn with_output_dir<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_sink(DirectorySink::new(path))
    }

    pub fn with_sink<S: ArtifactSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Consumes the builder and creates the pipeline. A missing sink is not an
    /// error here; exports fail with an environment error instead.
    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        let inner = self
            .resources
            .unwrap_or_else(|| Arc::new(InMemoryResourceProvider::new()));
        let resources: Arc<dyn ResourceProvider> = Arc::new(DataUrlResourceProvider::new(inner));

        if self.sink.is_none() {
            log::warn!("Export pipeline built without an artifact sink");
        }
        log::debug!(
            "Building export pipeline: page width {}, font {:?}",
            self.config.options.page_width,
            self.config.options.font_family
        );
        Ok(ExportPipeline::new(self.config, resources, self.sink))
    }
}
