//! The section outline of a document.
//!
//! An outline is a flat `Vec<Section>` in which every section is either
//! top-level or the child of a top-level section. Every function here takes a
//! snapshot and returns a new, normalized list; none of them fail. Invalid
//! references are flattened and disallowed operations are no-ops.

mod drag;
mod edit;
mod normalize;

pub use drag::{is_hierarchy_drop_allowed, reorder_by_drag};
pub use edit::{AddOutcome, add_child_section, add_parent_section, remove_section_with_children};
pub use normalize::{SectionGroup, build_groups, flatten_groups, normalize};
