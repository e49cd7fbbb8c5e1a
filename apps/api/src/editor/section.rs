use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::document::{DocumentStore, Section};
use crate::editor::draft::Draft;
use crate::editor::EditorError;
use crate::ids::IdGenerator;
use crate::models::{Document, EntryField, FieldValue, ListEntry};
use crate::storage::{load_json, save_json, KvStore, StorageError};

/// Where a section editor stands relative to the committed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditMode {
    /// Nothing typed since the last submit or cancel.
    Idle,
    /// Composing a new entry.
    Drafting,
    /// Reworking the committed entry `id`; submit replaces it in place.
    Editing { id: String },
}

type FieldOf<S> = <<S as Section>::Entry as ListEntry>::Field;

/// Pending-edit state for one list of the document.
///
/// The draft is saved under the section's own key after every change, so
/// unsubmitted input survives a restart. The committed document is only
/// touched by [`SectionEditor::submit`].
pub struct SectionEditor<S: Section> {
    draft: Draft<S::Entry>,
    mode: EditMode,
    kv: Arc<dyn KvStore>,
    ids: Arc<dyn IdGenerator>,
    _section: PhantomData<S>,
}

impl<S: Section> SectionEditor<S> {
    /// Restores the persisted draft. A draft that carries an entry id was
    /// mid-edit when saved and resumes in editing mode; a saved sub-item edit
    /// target resumes too, unless that sub-item is gone.
    pub fn open(kv: Arc<dyn KvStore>, ids: Arc<dyn IdGenerator>) -> Self {
        let mut draft: Draft<S::Entry> =
            load_json(kv.as_ref(), &S::LIST.draft_key()).unwrap_or_default();
        draft.clear_stale_target();
        let mode = if !draft.entry.id().is_empty() {
            EditMode::Editing {
                id: draft.entry.id().to_string(),
            }
        } else if draft.is_empty() {
            EditMode::Idle
        } else {
            EditMode::Drafting
        };

        Self {
            draft,
            mode,
            kv,
            ids,
            _section: PhantomData,
        }
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft<S::Entry> {
        &self.draft
    }

    pub fn editing_sub_id(&self) -> Option<&str> {
        self.draft.editing_item_id.as_deref()
    }

    pub fn set_field(&mut self, field: FieldOf<S>, value: FieldValue) -> Result<(), EditorError> {
        self.draft.entry.set(field, value)?;
        self.touch();
        self.persist()?;
        Ok(())
    }

    /// Updates the text of the sub-item input without submitting it.
    pub fn set_current_item(&mut self, content: String) -> Result<(), EditorError> {
        self.draft.current_item = content;
        self.touch();
        self.persist()?;
        Ok(())
    }

    /// Loads committed entry `id` into the draft. The document is not modified.
    pub fn begin_edit(&mut self, doc: &Document, id: &str) -> Result<(), EditorError> {
        let entry = S::list(doc)
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| EditorError::EntryNotFound(id.to_string()))?;

        self.draft = Draft::from_entry(entry);
        self.mode = EditMode::Editing { id: id.to_string() };
        debug!("Editing {} entry {id}", S::LIST);
        self.persist()?;
        Ok(())
    }

    /// Commits the pending sub-item input (or `content`, when given) to the
    /// draft's sub-list. Returns the touched sub-item id, `None` when there was
    /// nothing to add.
    pub fn submit_sub_item(&mut self, content: Option<String>) -> Result<Option<String>, EditorError> {
        let content = content.unwrap_or_else(|| self.draft.current_item.clone());
        let target = self.draft.editing_item_id.clone();
        let touched = self
            .draft
            .add_or_update_sub_item(&content, target.as_deref(), self.ids.as_ref());
        if touched.is_none() {
            return Ok(None);
        }

        self.draft.editing_item_id = None;
        self.draft.current_item.clear();
        self.touch();
        self.persist()?;
        Ok(touched)
    }

    /// Targets sub-item `id` for the next sub-item submit and loads its content
    /// into the input.
    pub fn begin_sub_item_edit(&mut self, id: &str) -> Result<(), EditorError> {
        let content = self
            .draft
            .entry
            .sub_items()
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.content.clone())
            .ok_or_else(|| EditorError::SubItemNotFound(id.to_string()))?;

        self.draft.current_item = content;
        self.draft.editing_item_id = Some(id.to_string());
        self.touch();
        self.persist()?;
        Ok(())
    }

    /// Removes sub-item `id`. Deleting the current sub-item edit target also
    /// clears the target and the input. An unknown id changes nothing.
    pub fn delete_sub_item(&mut self, id: &str) -> Result<bool, EditorError> {
        let removed = self.draft.delete_sub_item(id);
        let was_target = self.draft.editing_item_id.as_deref() == Some(id);
        if !removed && !was_target {
            return Ok(false);
        }

        if was_target {
            self.draft.editing_item_id = None;
            self.draft.current_item.clear();
        }
        self.touch();
        self.persist()?;
        Ok(removed)
    }

    /// Integrates the draft into the committed list and resets to idle.
    ///
    /// A draft with a blank required field is rejected and nothing changes.
    pub fn submit(&mut self, store: &mut DocumentStore) -> Result<String, EditorError> {
        self.draft.entry.validate()?;

        let editing_id = match &self.mode {
            EditMode::Editing { id } => Some(id.clone()),
            EditMode::Idle | EditMode::Drafting => None,
        };
        let outcome = store.upsert::<S>(self.draft.entry.clone(), editing_id.as_deref());

        // The store keeps the new snapshot even if saving it failed.
        self.reset();
        self.persist()?;
        Ok(outcome?)
    }

    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.reset();
        self.persist()?;
        Ok(())
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.mode = EditMode::Idle;
    }

    // Idle means nothing typed: a change that leaves the draft empty stays idle.
    fn touch(&mut self) {
        if self.mode == EditMode::Idle && !self.draft.is_empty() {
            self.mode = EditMode::Drafting;
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_json(self.kv.as_ref(), &S::LIST.draft_key(), &self.draft)
    }
}

/// Field schema entry as exposed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: crate::models::FieldKind,
    pub required: bool,
}

pub fn field_schema<S: Section>() -> Vec<FieldSchema> {
    <FieldOf<S> as EntryField>::ALL
        .iter()
        .map(|f| FieldSchema {
            name: f.name(),
            kind: f.kind(),
            required: f.required(),
        })
        .collect()
}
