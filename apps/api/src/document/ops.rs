//! Pure document transitions. Each returns a new document and leaves the input
//! untouched; persisting the result is the caller's job.

use tracing::debug;

use crate::document::reorder::reorder as reorder_list;
use crate::document::sections::Section;
use crate::ids::IdGenerator;
use crate::models::{BasicField, ContactField, Document, ListEntry, ListName};

/// Runs `$body` against the named list, whatever its entry type.
macro_rules! with_list_mut {
    ($doc:expr, $list:expr, |$items:ident| $body:expr) => {
        match $list {
            ListName::EducationInfo => {
                let $items = &mut $doc.education_info;
                $body
            }
            ListName::ExperienceInfo => {
                let $items = &mut $doc.experience_info;
                $body
            }
            ListName::SkillsInfo => {
                let $items = &mut $doc.skills_info;
                $body
            }
            ListName::OtherInfo => {
                let $items = &mut $doc.other_info;
                $body
            }
        }
    };
}

pub fn set_basic_field(doc: &Document, field: BasicField, value: impl Into<String>) -> Document {
    let mut next = doc.clone();
    next.basic_info.set(field, value.into());
    next
}

pub fn set_contact_field(doc: &Document, field: ContactField, value: impl Into<String>) -> Document {
    let mut next = doc.clone();
    next.contact_info.set(field, value.into());
    next
}

/// Replaces the entry whose id is `editing_id`, keeping its position and id, or
/// appends `entry` under a fresh id. Returns the new document and the id the
/// entry ended up with.
///
/// An `editing_id` that matches nothing (the entry was deleted while being
/// edited) falls back to an append with a fresh id; the stale id is never
/// reused.
pub fn upsert_list_entry<S: Section>(
    doc: &Document,
    mut entry: S::Entry,
    editing_id: Option<&str>,
    ids: &dyn IdGenerator,
) -> (Document, String) {
    let mut next = doc.clone();
    let list = S::list_mut(&mut next);

    let position = editing_id.and_then(|id| list.iter().position(|e| e.id() == id));
    let id = match position {
        Some(pos) => {
            let id = list[pos].id().to_string();
            entry.set_id(id.clone());
            list[pos] = entry;
            id
        }
        None => {
            if let Some(stale) = editing_id {
                debug!("Edit target '{stale}' no longer in {}, appending as new", S::LIST);
            }
            let id = ids.next_id();
            entry.set_id(id.clone());
            list.push(entry);
            id
        }
    };
    (next, id)
}

/// Removes the entry with `id`. Unknown ids leave the document as it was.
pub fn delete_list_entry(doc: &Document, list: ListName, id: &str) -> Document {
    let mut next = doc.clone();
    with_list_mut!(next, list, |items| items.retain(|e| e.id() != id));
    next
}

/// Applies one move to the named list. `None` means the move was rejected and
/// the document is unchanged.
pub fn reorder(doc: &Document, list: ListName, source_index: i64, dest_index: i64) -> Option<Document> {
    let mut next = doc.clone();
    let moved = with_list_mut!(next, list, |items| {
        match reorder_list(items.as_slice(), source_index, dest_index) {
            Some(reordered) => {
                *items = reordered;
                true
            }
            None => false,
        }
    });
    moved.then_some(next)
}
