//! Model layer
//!
//! - `resource` - resource kinds, field schemas and the `Resource` trait
//! - `entry` - the word, sentence and dialogue entities
//! - `form` - form buffer and payload normalization
//! - `modal` - modal overlay stack
//! - `ui` - focus and backend status

pub mod entry;
pub mod form;
pub mod modal;
pub mod resource;
pub mod ui;

pub use entry::{Dialogue, Sentence, Word};
pub use form::{FormState, Payload};
pub use resource::{EntryId, FieldKind, FieldSpec, Resource, ResourceKind};
pub use ui::{BackendStatus, Focus};
