//! Block renderers. Each module adds the `render_*` method for one block kind
//! to [`Renderer`](crate::Renderer).

mod heading;
mod image;
mod list;
mod page_break;
mod paragraph;
mod rule;
mod table;
