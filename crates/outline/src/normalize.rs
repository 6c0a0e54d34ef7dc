use folio_types::Section;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// A top-level section together with its children, both in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup {
    pub parent: Section,
    pub children: Vec<Section>,
}

impl SectionGroup {
    pub fn new(parent: Section) -> Self {
        Self {
            parent,
            children: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        1 + self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Restores every outline invariant.
///
/// Sections are ordered by `(order, original index)`. Blank, self, dangling and
/// nested parent references collapse to top-level, at least one top-level
/// section is guaranteed, and `order` is rewritten as `0..n` over the
/// parent-then-children flattening.
pub fn normalize(sections: &[Section]) -> Vec<Section> {
    flatten_groups(build_groups(sections))
}

/// Normalizes, then partitions the outline into groups.
pub fn build_groups(sections: &[Section]) -> Vec<SectionGroup> {
    let mut sorted: Vec<Section> = sections
        .iter()
        .enumerate()
        .sorted_by_key(|(index, section)| (section.order, *index))
        .map(|(_, section)| section.clone())
        .collect();

    for section in &mut sorted {
        if section.parent_id.as_deref().is_some_and(|p| p.trim().is_empty()) {
            section.parent_id = None;
        }
    }

    if !sorted.iter().any(Section::is_top_level) {
        if let Some(first) = sorted.first_mut() {
            log::warn!(
                "Outline has no top-level section; promoting '{}' to top level",
                first.id
            );
            first.parent_id = None;
        }
    }

    let top_level: HashSet<String> = sorted
        .iter()
        .filter(|s| s.is_top_level())
        .map(|s| s.id.clone())
        .collect();

    for section in &mut sorted {
        let Some(parent_id) = section.parent_id.as_deref() else {
            continue;
        };
        if parent_id == section.id || !top_level.contains(parent_id) {
            log::warn!(
                "Section '{}' references invalid parent '{}'; moving it to top level",
                section.id,
                parent_id
            );
            section.parent_id = None;
        }
    }

    let (parents, children): (Vec<Section>, Vec<Section>) =
        sorted.into_iter().partition(Section::is_top_level);

    let mut children_by_parent: HashMap<String, Vec<Section>> = HashMap::new();
    for child in children {
        if let Some(parent_id) = child.parent_id.clone() {
            children_by_parent.entry(parent_id).or_default().push(child);
        }
    }

    parents
        .into_iter()
        .map(|parent| {
            let children = children_by_parent.remove(&parent.id).unwrap_or_default();
            SectionGroup { parent, children }
        })
        .collect()
}

/// Flattens groups parent-first and rewrites `order` as `0..n`.
pub fn flatten_groups(groups: Vec<SectionGroup>) -> Vec<Section> {
    groups
        .into_iter()
        .flat_map(|group| std::iter::once(group.parent).chain(group.children))
        .enumerate()
        .map(|(index, mut section)| {
            section.order = index as i64;
            section
        })
        .collect()
}
