use std::sync::Arc;

use tracing::{debug, info};

use crate::document::ops;
use crate::document::sections::Section;
use crate::ids::IdGenerator;
use crate::models::document::DOCUMENT_KEY;
use crate::models::{BasicField, ContactField, Document, ListName};
use crate::storage::{load_json, save_json, KvStore, StorageError};

/// Reads the committed document, falling back to the empty template when the
/// key is absent, unreadable or malformed. Never fails.
pub fn load(kv: &dyn KvStore) -> Document {
    load_json(kv, DOCUMENT_KEY).unwrap_or_default()
}

/// Writes the full document under the document key.
pub fn save(kv: &dyn KvStore, doc: &Document) -> Result<(), StorageError> {
    save_json(kv, DOCUMENT_KEY, doc)
}

/// Owns the current document snapshot.
///
/// Every mutation replaces the snapshot wholesale and then runs the on-change
/// hook, which persists it. If persisting fails the new snapshot is still kept
/// and the storage error is returned.
pub struct DocumentStore {
    current: Document,
    kv: Arc<dyn KvStore>,
    ids: Arc<dyn IdGenerator>,
}

impl DocumentStore {
    pub fn open(kv: Arc<dyn KvStore>, ids: Arc<dyn IdGenerator>) -> Self {
        let current = load(kv.as_ref());
        info!(
            "Document loaded ({} education, {} experience, {} skills, {} other)",
            current.education_info.len(),
            current.experience_info.len(),
            current.skills_info.len(),
            current.other_info.len()
        );
        Self { current, kv, ids }
    }

    pub fn document(&self) -> &Document {
        &self.current
    }

    pub fn set_basic_field(&mut self, field: BasicField, value: String) -> Result<(), StorageError> {
        let next = ops::set_basic_field(&self.current, field, value);
        self.commit(next)
    }

    pub fn set_contact_field(
        &mut self,
        field: ContactField,
        value: String,
    ) -> Result<(), StorageError> {
        let next = ops::set_contact_field(&self.current, field, value);
        self.commit(next)
    }

    /// Integrates a submitted entry and returns the id it was stored under.
    pub fn upsert<S: Section>(
        &mut self,
        entry: S::Entry,
        editing_id: Option<&str>,
    ) -> Result<String, StorageError> {
        let (next, id) =
            ops::upsert_list_entry::<S>(&self.current, entry, editing_id, self.ids.as_ref());
        debug!("Upserted {} entry {id}", S::LIST);
        self.commit(next)?;
        Ok(id)
    }

    /// Returns whether an entry was removed. Persists either way.
    pub fn delete(&mut self, list: ListName, id: &str) -> Result<bool, StorageError> {
        let before = self.current.list_len(list);
        let next = ops::delete_list_entry(&self.current, list, id);
        let removed = next.list_len(list) < before;
        self.commit(next)?;
        Ok(removed)
    }

    /// Returns whether the list changed. Rejected moves do not persist.
    pub fn reorder(
        &mut self,
        list: ListName,
        source_index: i64,
        dest_index: i64,
    ) -> Result<bool, StorageError> {
        match ops::reorder(&self.current, list, source_index, dest_index) {
            Some(next) => {
                self.commit(next)?;
                Ok(true)
            }
            None => {
                debug!("Ignored reorder of {list} from {source_index} to {dest_index}");
                Ok(false)
            }
        }
    }

    fn commit(&mut self, next: Document) -> Result<(), StorageError> {
        self.current = next;
        self.on_change()
    }

    fn on_change(&self) -> Result<(), StorageError> {
        save(self.kv.as_ref(), &self.current)
    }
}
