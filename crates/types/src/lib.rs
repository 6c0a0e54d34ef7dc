pub mod color;
pub mod document;
pub mod financial;
pub mod geometry;

pub use color::Color;
pub use document::{Document, DropPosition, Section, SectionDragItem, SectionId, SectionKind};
pub use financial::{ColumnAlign, FinancialColumn, FinancialReportBlock, FinancialRow};
pub use geometry::{Rect, Size};
