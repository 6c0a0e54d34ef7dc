use crate::normalize::{SectionGroup, build_groups, flatten_groups, normalize};
use folio_types::{DropPosition, Section, SectionDragItem, SectionKind};

/// A drop is legal between two top-level sections, or between two children
/// of the same parent.
pub fn is_hierarchy_drop_allowed(dragged: &SectionDragItem, target: &SectionDragItem) -> bool {
    match (dragged.kind, target.kind) {
        (SectionKind::Parent, SectionKind::Parent) => true,
        (SectionKind::Child, SectionKind::Child) => {
            dragged.parent_id.is_some() && dragged.parent_id == target.parent_id
        }
        _ => false,
    }
}

/// Moves `dragged` next to `target`.
///
/// Parents move together with their children. Children move only within their
/// own parent. Disallowed drops and unknown ids return the normalized input.
pub fn reorder_by_drag(
    sections: &[Section],
    dragged: &SectionDragItem,
    target: &SectionDragItem,
    position: DropPosition,
) -> Vec<Section> {
    if !is_hierarchy_drop_allowed(dragged, target) {
        log::debug!(
            "Ignoring drop of '{}' onto '{}': hierarchy mismatch",
            dragged.section_id,
            target.section_id
        );
        return normalize(sections);
    }

    let mut groups = build_groups(sections);
    match dragged.kind {
        SectionKind::Parent => {
            move_relative(
                &mut groups,
                |g: &SectionGroup| g.parent.id == dragged.section_id,
                |g: &SectionGroup| g.parent.id == target.section_id,
                position,
            );
        }
        SectionKind::Child => {
            let owner = groups
                .iter_mut()
                .find(|g| Some(&g.parent.id) == dragged.parent_id.as_ref());
            if let Some(group) = owner {
                move_relative(
                    &mut group.children,
                    |c: &Section| c.id == dragged.section_id,
                    |c: &Section| c.id == target.section_id,
                    position,
                );
            }
        }
    }
    flatten_groups(groups)
}

/// Removes the item matching `is_dragged` and reinserts it before or after the
/// item matching `is_target`, compensating for the removal shifting indices.
fn move_relative<T>(
    items: &mut Vec<T>,
    is_dragged: impl Fn(&T) -> bool,
    is_target: impl Fn(&T) -> bool,
    position: DropPosition,
) {
    let (Some(from), Some(to)) = (
        items.iter().position(&is_dragged),
        items.iter().position(&is_target),
    ) else {
        log::debug!("Drop ignored: dragged or target section not found");
        return;
    };
    if from == to {
        return;
    }

    let item = items.remove(from);
    let target = if from < to { to - 1 } else { to };
    let insert_at = match position {
        DropPosition::Above => target,
        DropPosition::Below => target + 1,
    };
    items.insert(insert_at, item);
}
