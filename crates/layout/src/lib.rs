use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Page content width must be positive, got {0:.2}mm.")]
    InvalidGeometry(f32),
    #[error("Content tree is nested deeper than {0} levels.")]
    NestingTooDeep(usize),
}

pub mod config;
pub mod context;
mod engine;
pub mod node_kind;
mod nodes;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::context::RenderContext;
pub use self::engine::{LayoutSummary, Renderer, render_tree};
pub use self::node_kind::BlockKind;

#[cfg(test)]
mod test_utils;
