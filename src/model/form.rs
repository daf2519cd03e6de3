//! Form buffer for creating and editing entries
//!
//! Holds raw text per field exactly as typed. Normalization to a request
//! payload happens only on submit.

use super::resource::{FieldKind, FieldSpec};
use crate::error::ValidationError;
use serde_json::{Map, Value};

/// JSON object sent as a create/update body
pub type Payload = Map<String, Value>;

/// Split comma-separated input into trimmed, non-empty tags
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags as form text, ready to be parsed again
pub fn tags_to_input(tags: &[String]) -> String {
    tags.join(", ")
}

/// Tags as shown in the detail view
pub fn tags_to_display(tags: &[String]) -> String {
    tags.join(" / ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: &'static [FieldSpec],
    values: Vec<String>,
    /// Index of the field receiving input
    pub focus: usize,
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
            focus: 0,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[cfg(test)]
    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    #[cfg(test)]
    pub fn value(&self, name: &str) -> &str {
        self.index_of(name)
            .map(|i| self.values[i].as_str())
            .unwrap_or("")
    }

    #[cfg(test)]
    pub fn set(&mut self, name: &str, text: impl Into<String>) {
        if let Some(i) = self.index_of(name) {
            self.values[i] = text.into();
        }
    }

    /// Back to the empty defaults
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.focus = 0;
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.trim().is_empty())
    }

    pub fn focused_field(&self) -> Option<&FieldSpec> {
        self.fields.get(self.focus)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    pub fn push_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        if let Some(value) = self.values.get_mut(self.focus) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.values.get_mut(self.focus) {
            value.pop();
        }
    }

    /// Newline in multi-line fields; moves to the next field otherwise.
    pub fn insert_newline(&mut self) {
        match self.focused_field().map(|f| f.kind) {
            Some(FieldKind::Text) => self.values[self.focus].push('\n'),
            _ => self.focus_next(),
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = if self.focus == 0 {
                self.fields.len() - 1
            } else {
                self.focus - 1
            };
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill the form from an entity's field values.
    ///
    /// Missing and null values become empty text; tag arrays are joined
    /// with `", "`.
    pub fn populate(&mut self, entry: &Map<String, Value>) {
        for (i, field) in self.fields.iter().enumerate() {
            self.values[i] = match entry.get(field.name) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Array(items)) => {
                    let tags: Vec<String> = items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect();
                    tags_to_input(&tags)
                }
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
        }
        self.focus = 0;
    }

    /// Build the request body, or report every required field left empty.
    pub fn to_payload(&self) -> Result<Payload, ValidationError> {
        let mut payload = Payload::new();
        let mut missing = Vec::new();

        for (field, raw) in self.fields.iter().zip(&self.values) {
            let value = match field.kind {
                FieldKind::Tags => {
                    let tags = parse_tags(raw);
                    if tags.is_empty() {
                        Value::Null
                    } else {
                        Value::from(tags)
                    }
                }
                FieldKind::Line | FieldKind::Text => {
                    let trimmed = raw.trim();
                    if trimmed.is_empty() {
                        Value::Null
                    } else {
                        Value::String(trimmed.to_string())
                    }
                }
            };

            if field.required && value.is_null() {
                missing.push(field.name);
            }
            payload.insert(field.name.to_string(), value);
        }

        if missing.is_empty() {
            Ok(payload)
        } else {
            Err(ValidationError { missing })
        }
    }
}
