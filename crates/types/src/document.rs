use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Identifier of a [`Section`].
pub type SectionId = String;

/// A titled content unit in the document outline.
///
/// Top-level ("parent") sections have `parent_id == None`; "child" sections
/// point at the id of a top-level section. Only one level of nesting exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub parent_id: Option<SectionId>,
    /// Serialized rich-content tree (a `doc` node). Opaque to the outline model.
    #[serde(default = "Section::empty_content")]
    pub content: Value,
}

impl Section {
    /// Creates a top-level section with a fresh id and an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            order: 0,
            parent_id: None,
            content: Self::empty_content(),
        }
    }

    /// Creates a child section of `parent_id` with a fresh id and an empty body.
    pub fn new_child(parent_id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::new(title)
        }
    }

    /// The content of a freshly created section: a document with one empty paragraph.
    pub fn empty_content() -> Value {
        json!({ "type": "doc", "content": [{ "type": "paragraph" }] })
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn kind(&self) -> SectionKind {
        if self.is_top_level() {
            SectionKind::Parent
        } else {
            SectionKind::Child
        }
    }

    /// Describes this section as the subject of a drag operation.
    pub fn drag_item(&self) -> SectionDragItem {
        SectionDragItem {
            section_id: self.id.clone(),
            kind: self.kind(),
            parent_id: self.parent_id.clone(),
        }
    }
}

/// An annual-report style document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Values substituted for tag mentions inside section content.
    #[serde(default)]
    pub tag_values: BTreeMap<String, String>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            sections: Vec::new(),
            tag_values: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Parent,
    Child,
}

/// Transient descriptor of a section being dragged (or hovered as a drop target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDragItem {
    pub section_id: SectionId,
    pub kind: SectionKind,
    #[serde(default)]
    pub parent_id: Option<SectionId>,
}

impl SectionDragItem {
    pub fn parent(section_id: impl Into<SectionId>) -> Self {
        Self {
            section_id: section_id.into(),
            kind: SectionKind::Parent,
            parent_id: None,
        }
    }

    pub fn child(section_id: impl Into<SectionId>, parent_id: impl Into<SectionId>) -> Self {
        Self {
            section_id: section_id.into(),
            kind: SectionKind::Child,
            parent_id: Some(parent_id.into()),
        }
    }
}

/// Where a dragged section lands relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Above,
    Below,
}
