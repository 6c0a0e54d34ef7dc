//! The export pipeline: configuration, construction and the async orchestrator.

mod builder;
mod config;
mod filename;
mod orchestrator;
mod sink;

pub use builder::PipelineBuilder;
pub use config::{PipelineConfig, load_options};
pub use filename::sanitize_filename;
pub use orchestrator::{ExportPipeline, ExportSummary, export_to_pdf};
pub use sink::{ArtifactSink, DirectorySink, ExportArtifact, MemorySink};
