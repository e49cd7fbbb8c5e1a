use serde::Serialize;
use serde_json::Value;

use crate::document::{DocumentStore, Section};
use crate::editor::section::{field_schema, EditMode, FieldSchema, SectionEditor};
use crate::editor::EditorError;
use crate::models::{Document, EntryField, FieldValue, ListEntry, ListName};

/// Client-facing view of one editor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub list: ListName,
    pub mode: EditMode,
    pub editing_item_id: Option<String>,
    pub fields: Vec<FieldSchema>,
    pub draft: Value,
}

/// Section editors addressed by list name at runtime, with field names as strings.
pub trait SectionEditing: Send {
    fn snapshot(&self) -> Result<EditorSnapshot, EditorError>;
    fn set_field_by_name(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError>;
    fn set_current_item(&mut self, content: String) -> Result<(), EditorError>;
    fn submit_sub_item(&mut self, content: Option<String>) -> Result<Option<String>, EditorError>;
    fn begin_sub_item_edit(&mut self, id: &str) -> Result<(), EditorError>;
    fn delete_sub_item(&mut self, id: &str) -> Result<bool, EditorError>;
    fn begin_edit(&mut self, doc: &Document, id: &str) -> Result<(), EditorError>;
    fn submit(&mut self, store: &mut DocumentStore) -> Result<String, EditorError>;
    fn cancel(&mut self) -> Result<(), EditorError>;
}

impl<S: Section> SectionEditing for SectionEditor<S> {
    fn snapshot(&self) -> Result<EditorSnapshot, EditorError> {
        Ok(EditorSnapshot {
            list: S::LIST,
            mode: self.mode().clone(),
            editing_item_id: self.editing_sub_id().map(str::to_string),
            fields: field_schema::<S>(),
            draft: serde_json::to_value(self.draft())?,
        })
    }

    fn set_field_by_name(&mut self, name: &str, value: FieldValue) -> Result<(), EditorError> {
        let field = <<S::Entry as ListEntry>::Field as EntryField>::parse_name(name)?;
        self.set_field(field, value)
    }

    fn set_current_item(&mut self, content: String) -> Result<(), EditorError> {
        SectionEditor::set_current_item(self, content)
    }

    fn submit_sub_item(&mut self, content: Option<String>) -> Result<Option<String>, EditorError> {
        SectionEditor::submit_sub_item(self, content)
    }

    fn begin_sub_item_edit(&mut self, id: &str) -> Result<(), EditorError> {
        SectionEditor::begin_sub_item_edit(self, id)
    }

    fn delete_sub_item(&mut self, id: &str) -> Result<bool, EditorError> {
        SectionEditor::delete_sub_item(self, id)
    }

    fn begin_edit(&mut self, doc: &Document, id: &str) -> Result<(), EditorError> {
        SectionEditor::begin_edit(self, doc, id)
    }

    fn submit(&mut self, store: &mut DocumentStore) -> Result<String, EditorError> {
        SectionEditor::submit(self, store)
    }

    fn cancel(&mut self) -> Result<(), EditorError> {
        SectionEditor::cancel(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Education, Skills};
    use crate::errors::ValidationError;
    use crate::ids::SequentialIds;
    use crate::storage::MemoryKvStore;
    use serde_json::json;
    use std::sync::Arc;

    fn boxed<S: Section>() -> Box<dyn SectionEditing> {
        Box::new(SectionEditor::<S>::open(
            Arc::new(MemoryKvStore::new()),
            Arc::new(SequentialIds::default()),
        ))
    }

    #[test]
    fn test_set_field_by_name() {
        let mut editor = boxed::<Education>();
        editor
            .set_field_by_name("institution", FieldValue::Text("MIT".to_string()))
            .unwrap();
        editor
            .set_field_by_name("onGoing", FieldValue::Flag(false))
            .unwrap();

        let snapshot = editor.snapshot().unwrap();
        assert_eq!(snapshot.list, ListName::EducationInfo);
        assert_eq!(snapshot.mode, EditMode::Drafting);
        assert_eq!(snapshot.draft["institution"], json!("MIT"));
        assert_eq!(snapshot.draft["onGoing"], json!(false));
    }

    #[test]
    fn test_unknown_field_name_rejected() {
        let mut editor = boxed::<Skills>();
        let err = editor
            .set_field_by_name("institution", FieldValue::Text("MIT".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::UnknownField(_))
        ));
        assert_eq!(editor.snapshot().unwrap().mode, EditMode::Idle);
    }

    #[test]
    fn test_snapshot_serializes_mode_tag() {
        let editor = boxed::<Skills>();
        let value = serde_json::to_value(editor.snapshot().unwrap()).unwrap();
        assert_eq!(value["mode"], json!({ "state": "idle" }));
        assert_eq!(value["list"], json!("skillsInfo"));
        assert_eq!(value["fields"][0]["name"], json!("category"));
    }

    #[test]
    fn test_snapshot_reports_sub_item_edit_target() {
        let mut editor = boxed::<Skills>();
        editor
            .set_field_by_name("category", FieldValue::Text("Languages".to_string()))
            .unwrap();
        let id = editor.submit_sub_item(Some("Frnech".to_string())).unwrap().unwrap();
        editor.begin_sub_item_edit(&id).unwrap();

        let snapshot = editor.snapshot().unwrap();
        assert_eq!(snapshot.editing_item_id.as_deref(), Some(id.as_str()));
        assert_eq!(snapshot.draft["editingItemId"], json!(id));
        assert_eq!(snapshot.draft["currentItem"], json!("Frnech"));
    }
}
