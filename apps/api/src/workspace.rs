use std::sync::Arc;

use crate::document::{DocumentStore, Education, Experience, Other, Skills};
use crate::editor::{EditorError, SectionEditing, SectionEditor};
use crate::ids::IdGenerator;
use crate::models::{Document, ListName};
use crate::storage::KvStore;

/// The whole editing session: the committed document and one editor per list.
pub struct Workspace {
    store: DocumentStore,
    education: SectionEditor<Education>,
    experience: SectionEditor<Experience>,
    skills: SectionEditor<Skills>,
    other: SectionEditor<Other>,
}

impl Workspace {
    pub fn open(kv: Arc<dyn KvStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: DocumentStore::open(kv.clone(), ids.clone()),
            education: SectionEditor::open(kv.clone(), ids.clone()),
            experience: SectionEditor::open(kv.clone(), ids.clone()),
            skills: SectionEditor::open(kv.clone(), ids.clone()),
            other: SectionEditor::open(kv, ids),
        }
    }

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    pub fn editor(&self, list: ListName) -> &dyn SectionEditing {
        match list {
            ListName::EducationInfo => &self.education,
            ListName::ExperienceInfo => &self.experience,
            ListName::SkillsInfo => &self.skills,
            ListName::OtherInfo => &self.other,
        }
    }

    pub fn editor_mut(&mut self, list: ListName) -> &mut dyn SectionEditing {
        self.split(list).1
    }

    /// Loads committed entry `id` of `list` into that list's editor.
    pub fn begin_edit(&mut self, list: ListName, id: &str) -> Result<(), EditorError> {
        let (store, editor) = self.split(list);
        editor.begin_edit(store.document(), id)
    }

    /// Submits the draft of `list` into the document.
    pub fn submit(&mut self, list: ListName) -> Result<String, EditorError> {
        let (store, editor) = self.split(list);
        editor.submit(store)
    }

    fn split(&mut self, list: ListName) -> (&mut DocumentStore, &mut dyn SectionEditing) {
        let editor: &mut dyn SectionEditing = match list {
            ListName::EducationInfo => &mut self.education,
            ListName::ExperienceInfo => &mut self.experience,
            ListName::SkillsInfo => &mut self.skills,
            ListName::OtherInfo => &mut self.other,
        };
        (&mut self.store, editor)
    }
}
