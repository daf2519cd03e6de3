//! Study material entities as returned by the backend

use super::resource::{EntryId, FieldKind, FieldSpec, Resource, ResourceKind};
use serde::{Deserialize, Serialize};

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: EntryId,
    pub word: String,
    pub meaning_cn: String,
    #[serde(default)]
    pub example_en: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A sentence with translation and optional categorization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: EntryId,
    pub sentence_en: String,
    pub translation_cn: String,
    #[serde(default)]
    pub scene: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub scene_categories: Option<Vec<String>>,
    #[serde(default)]
    pub topic_categories: Option<Vec<String>>,
    #[serde(default)]
    pub domain_categories: Option<Vec<String>>,
}

/// A scene dialogue, usually several `A: ...` / `B: ...` lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub scene: Option<String>,
    pub dialogue_en: String,
    #[serde(default)]
    pub dialogue_cn: Option<String>,
}

const WORD_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("word", "单词", FieldKind::Line),
    FieldSpec::required("meaning_cn", "释义", FieldKind::Line),
    FieldSpec::optional("example_en", "例句", FieldKind::Line),
    FieldSpec::optional("notes", "备注", FieldKind::Line),
];

const SENTENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("sentence_en", "英文", FieldKind::Text),
    FieldSpec::required("translation_cn", "中文", FieldKind::Text),
    FieldSpec::optional("scene", "场景", FieldKind::Line),
    FieldSpec::optional("notes", "备注", FieldKind::Line),
    FieldSpec::optional("scene_categories", "场景分类", FieldKind::Tags),
    FieldSpec::optional("topic_categories", "主题分类", FieldKind::Tags),
    FieldSpec::optional("domain_categories", "领域分类", FieldKind::Tags),
];

const DIALOGUE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", "标题", FieldKind::Line),
    FieldSpec::optional("scene", "场景", FieldKind::Line),
    FieldSpec::required("dialogue_en", "英文", FieldKind::Text),
    FieldSpec::optional("dialogue_cn", "中文", FieldKind::Text),
];

impl Resource for Word {
    const KIND: ResourceKind = ResourceKind::Words;
    const FIELDS: &'static [FieldSpec] = WORD_FIELDS;

    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.word
    }

    fn subtitle(&self) -> &str {
        &self.meaning_cn
    }
}

impl Resource for Sentence {
    const KIND: ResourceKind = ResourceKind::Sentences;
    const FIELDS: &'static [FieldSpec] = SENTENCE_FIELDS;

    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.sentence_en
    }

    fn subtitle(&self) -> &str {
        &self.translation_cn
    }
}

impl Resource for Dialogue {
    const KIND: ResourceKind = ResourceKind::Dialogues;
    const FIELDS: &'static [FieldSpec] = DIALOGUE_FIELDS;

    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> &str {
        self.scene.as_deref().unwrap_or("")
    }
}
