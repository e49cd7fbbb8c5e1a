use serde::{Deserialize, Serialize};

use crate::ids::IdGenerator;
use crate::models::{ListEntry, SubItem};

/// A section's unsubmitted entry plus the state of its sub-item input: the
/// typed text and the sub-item that text will replace, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound = "E: ListEntry")]
pub struct Draft<E> {
    #[serde(flatten)]
    pub entry: E,
    #[serde(rename = "currentItem", default)]
    pub current_item: String,
    #[serde(rename = "editingItemId", default)]
    pub editing_item_id: Option<String>,
}

impl<E: ListEntry> Draft<E> {
    pub fn from_entry(entry: E) -> Self {
        Self {
            entry,
            current_item: String::new(),
            editing_item_id: None,
        }
    }

    /// Drops an edit target that no longer names a sub-item of the draft.
    pub fn clear_stale_target(&mut self) {
        let stale = match self.editing_item_id.as_deref() {
            Some(id) => !self.entry.sub_items().iter().any(|i| i.id == id),
            None => false,
        };
        if stale {
            self.editing_item_id = None;
            self.current_item.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replaces the content of `editing_sub_id` in place, or appends a new
    /// sub-item when no edit target is given or it no longer exists.
    /// Returns the id of the touched sub-item, or `None` for empty content.
    pub fn add_or_update_sub_item(
        &mut self,
        content: &str,
        editing_sub_id: Option<&str>,
        ids: &dyn IdGenerator,
    ) -> Option<String> {
        if content.is_empty() {
            return None;
        }

        let items = self.entry.sub_items_mut();
        if let Some(target) = editing_sub_id.and_then(|id| items.iter_mut().find(|i| i.id == id)) {
            target.content = content.to_string();
            return Some(target.id.clone());
        }

        let id = ids.next_id();
        items.push(SubItem::new(id.clone(), content));
        Some(id)
    }

    /// Returns whether a sub-item was removed.
    pub fn delete_sub_item(&mut self, id: &str) -> bool {
        let items = self.entry.sub_items_mut();
        let before = items.len();
        items.retain(|i| i.id != id);
        items.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::models::{CategoryEntry, EducationEntry};
    use serde_json::json;

    fn draft_with(items: &[(&str, &str)]) -> Draft<CategoryEntry> {
        Draft::from_entry(CategoryEntry {
            id: String::new(),
            category: "Languages".to_string(),
            items: items.iter().map(|(id, c)| SubItem::new(*id, *c)).collect(),
        })
    }

    #[test]
    fn test_append_sub_item() {
        let ids = SequentialIds::default();
        let mut draft = draft_with(&[("a", "English")]);

        let id = draft.add_or_update_sub_item("French", None, &ids);

        assert_eq!(id.as_deref(), Some("id-1"));
        assert_eq!(draft.entry.items[1], SubItem::new("id-1", "French"));
    }

    #[test]
    fn test_update_sub_item_in_place() {
        let ids = SequentialIds::default();
        let mut draft = draft_with(&[("a", "English"), ("b", "Frnech"), ("c", "German")]);

        let id = draft.add_or_update_sub_item("French", Some("b"), &ids);

        assert_eq!(id.as_deref(), Some("b"));
        let contents: Vec<_> = draft.entry.items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["English", "French", "German"]);
    }

    #[test]
    fn test_update_missing_target_appends() {
        let ids = SequentialIds::default();
        let mut draft = draft_with(&[("a", "English")]);

        draft.add_or_update_sub_item("French", Some("gone"), &ids);

        assert_eq!(draft.entry.items.len(), 2);
        assert_eq!(draft.entry.items[1].id, "id-1");
    }

    #[test]
    fn test_empty_content_ignored() {
        let ids = SequentialIds::default();
        let mut draft = draft_with(&[]);
        assert_eq!(draft.add_or_update_sub_item("", None, &ids), None);
        assert!(draft.entry.items.is_empty());
    }

    #[test]
    fn test_delete_sub_item() {
        let mut draft = draft_with(&[("a", "English"), ("b", "French")]);
        assert!(draft.delete_sub_item("a"));
        assert!(!draft.delete_sub_item("a"));
        assert_eq!(draft.entry.items, vec![SubItem::new("b", "French")]);
    }

    #[test]
    fn test_persisted_shape_is_flat() {
        let mut draft = Draft::from_entry(EducationEntry {
            institution: "MIT".to_string(),
            ..Default::default()
        });
        draft.current_item = "Thesis on compilers".to_string();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["institution"], json!("MIT"));
        assert_eq!(value["currentItem"], json!("Thesis on compilers"));
        assert_eq!(value["additionalInfo"], json!([]));

        let back: Draft<EducationEntry> = serde_json::from_value(value).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_edit_target_persists() {
        let mut draft = draft_with(&[("a", "Frnech")]);
        draft.current_item = "Frnech".to_string();
        draft.editing_item_id = Some("a".to_string());

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["editingItemId"], json!("a"));

        let back: Draft<CategoryEntry> = serde_json::from_value(value).unwrap();
        assert_eq!(back.editing_item_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_missing_edit_target_defaults_to_none() {
        let back: Draft<CategoryEntry> =
            serde_json::from_value(json!({ "category": "Languages", "items": [] })).unwrap();
        assert_eq!(back.editing_item_id, None);
        assert_eq!(back.current_item, "");
    }

    #[test]
    fn test_clear_stale_target() {
        let mut draft = draft_with(&[("a", "English")]);
        draft.editing_item_id = Some("gone".to_string());
        draft.current_item = "Frnech".to_string();
        draft.clear_stale_target();
        assert_eq!(draft.editing_item_id, None);
        assert_eq!(draft.current_item, "");

        draft.editing_item_id = Some("a".to_string());
        draft.current_item = "English".to_string();
        draft.clear_stale_target();
        assert_eq!(draft.editing_item_id.as_deref(), Some("a"));
        assert_eq!(draft.current_item, "English");
    }

    #[test]
    fn test_default_draft_is_empty() {
        assert!(Draft::<EducationEntry>::default().is_empty());
        assert!(!draft_with(&[]).is_empty());
    }
}
