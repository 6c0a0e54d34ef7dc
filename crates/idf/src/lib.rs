//! Intermediate Document Format (IDF)
//!
//! The layout engine never walks a concrete tree type. It walks anything that
//! implements [`ContentNode`]: a tag, attributes, an optional computed style,
//! ordered children and text. [`DomNode`] is the owned implementation used by
//! the pipeline, the CLI and the tests; it can be built programmatically,
//! decoded from JSON, or parsed from a well-formed XHTML fragment.

mod dom;
mod error;
mod node;
mod xhtml;

pub use dom::DomNode;
pub use error::IdfError;
pub use node::ContentNode;
