// Section editors: one pending draft per list, with the idle / drafting /
// editing state machine that decides whether a submit appends or replaces.

pub mod draft;
pub mod dynamic;
pub mod handlers;
pub mod section;

use thiserror::Error;

use crate::errors::ValidationError;
use crate::storage::StorageError;

pub use dynamic::{EditorSnapshot, SectionEditing};
pub use section::SectionEditor;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Item '{0}' not found in draft")]
    SubItemNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to render draft: {0}")]
    Serialization(#[from] serde_json::Error),
}
