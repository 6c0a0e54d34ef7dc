use crate::normalize::{SectionGroup, build_groups, flatten_groups};
use folio_types::Section;

/// Result of an insertion: the new outline and the section that was created.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub sections: Vec<Section>,
    pub created: Option<Section>,
}

/// Appends a new top-level section after the last group.
pub fn add_parent_section(sections: &[Section], title: &str) -> AddOutcome {
    let mut groups = build_groups(sections);
    let created = Section::new(title);
    groups.push(SectionGroup::new(created.clone()));
    let sections = flatten_groups(groups);
    let created = sections.iter().find(|s| s.id == created.id).cloned();
    AddOutcome { sections, created }
}

/// Appends a new child to the end of `parent_id`'s children.
///
/// When `parent_id` is not a top-level section nothing is created and the
/// normalized input is returned.
pub fn add_child_section(sections: &[Section], parent_id: &str, title: &str) -> AddOutcome {
    let mut groups = build_groups(sections);
    let Some(group) = groups.iter_mut().find(|g| g.parent.id == parent_id) else {
        log::debug!("Cannot add child: '{parent_id}' is not a top-level section");
        return AddOutcome {
            sections: flatten_groups(groups),
            created: None,
        };
    };

    let created = Section::new_child(parent_id, title);
    let id = created.id.clone();
    group.children.push(created);
    let sections = flatten_groups(groups);
    let created = sections.iter().find(|s| s.id == id).cloned();
    AddOutcome { sections, created }
}

/// Removes a top-level section with all of its children, or a single child.
pub fn remove_section_with_children(sections: &[Section], section_id: &str) -> Vec<Section> {
    let mut groups = build_groups(sections);
    if let Some(index) = groups.iter().position(|g| g.parent.id == section_id) {
        let removed = groups.remove(index);
        log::debug!(
            "Removed section '{}' with {} children",
            section_id,
            removed.children.len()
        );
    } else {
        for group in &mut groups {
            group.children.retain(|c| c.id != section_id);
        }
    }
    flatten_groups(groups)
}
