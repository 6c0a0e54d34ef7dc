//! # folio-core
//!
//! Converts the editor's serialized rich content into [`DomNode`] trees shaped
//! like the editor's rendered output, so the layout engine only ever walks one
//! kind of tree.
//!
//! - [`rich`]: the serialized `doc` node model
//! - [`convert`]: node-by-node conversion, tag-value substitution and marks
//! - [`financial`]: financial report blocks as plain tables
//! - [`document`]: a whole [`Document`] as one tree, in outline order

pub mod convert;
pub mod document;
mod error;
pub mod financial;
pub mod rich;

pub use convert::ContentConverter;
pub use document::{render_document, render_section};
pub use error::ParseError;
pub use financial::financial_report_node;
pub use rich::{Mark, RichNode};

pub use folio_idf::DomNode;
pub use folio_types::Document;
