//! Core rendering abstractions.
//!
//! - [`PdfSurface`]: the drawing primitives the layout engine emits, in
//!   millimeters with a top-left origin
//! - [`metrics`]: advance widths of the standard PDF fonts, used for wrapping
//! - [`RecordingSurface`]: a surface that records every call, for tests
//! - Shared unit and font-name helpers

mod error;
pub mod metrics;
mod recording;
mod surface;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawCall, RecordingSurface};
pub use surface::{DocumentInfo, Font, PdfSurface};
