//! Resource kinds and field schemas
//!
//! A panel knows nothing about words or dialogues; it is driven entirely by
//! the `Resource` impl of the entity it manages.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Server-issued entity identifier
pub type EntryId = i64;

/// The three collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Words,
    Sentences,
    Dialogues,
}

impl ResourceKind {
    pub fn all() -> Vec<ResourceKind> {
        vec![
            ResourceKind::Words,
            ResourceKind::Sentences,
            ResourceKind::Dialogues,
        ]
    }

    /// Path segment under `/api`
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Words => "words",
            ResourceKind::Sentences => "sentences",
            ResourceKind::Dialogues => "dialogues",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Words => "单词",
            ResourceKind::Sentences => "句子",
            ResourceKind::Dialogues => "场景对话",
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.path())
    }

    pub fn entry_path(&self, id: EntryId) -> String {
        format!("/api/{}/{}", self.path(), id)
    }
}

/// How a field is edited and transmitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Line,
    /// Multi-line text
    Text,
    /// Comma-separated tag list, sent as a JSON array
    Tags,
}

/// One field of an entity's form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub name: &'static str,
    /// Label shown in the form and detail view
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            required: true,
            kind,
        }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            required: false,
            kind,
        }
    }
}

/// An entity managed by a resource panel
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + 'static {
    const KIND: ResourceKind;
    /// Form fields in display order
    const FIELDS: &'static [FieldSpec];

    fn id(&self) -> EntryId;

    /// Headline shown in the list
    fn title(&self) -> &str;

    /// Second list line
    fn subtitle(&self) -> &str;
}

/// Field values of an entity keyed by JSON name
pub fn field_map<R: Resource>(entry: &R) -> Map<String, Value> {
    match serde_json::to_value(entry) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
