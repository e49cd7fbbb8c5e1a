use crate::models::{CategoryEntry, Document, EducationEntry, ExperienceEntry, ListEntry, ListName};

/// Binds one list of the document to its entry type.
pub trait Section: Send + Sync + 'static {
    type Entry: ListEntry;

    const LIST: ListName;

    fn list(doc: &Document) -> &Vec<Self::Entry>;
    fn list_mut(doc: &mut Document) -> &mut Vec<Self::Entry>;
}

pub struct Education;
pub struct Experience;
pub struct Skills;
pub struct Other;

impl Section for Education {
    type Entry = EducationEntry;
    const LIST: ListName = ListName::EducationInfo;

    fn list(doc: &Document) -> &Vec<EducationEntry> {
        &doc.education_info
    }

    fn list_mut(doc: &mut Document) -> &mut Vec<EducationEntry> {
        &mut doc.education_info
    }
}

impl Section for Experience {
    type Entry = ExperienceEntry;
    const LIST: ListName = ListName::ExperienceInfo;

    fn list(doc: &Document) -> &Vec<ExperienceEntry> {
        &doc.experience_info
    }

    fn list_mut(doc: &mut Document) -> &mut Vec<ExperienceEntry> {
        &mut doc.experience_info
    }
}

impl Section for Skills {
    type Entry = CategoryEntry;
    const LIST: ListName = ListName::SkillsInfo;

    fn list(doc: &Document) -> &Vec<CategoryEntry> {
        &doc.skills_info
    }

    fn list_mut(doc: &mut Document) -> &mut Vec<CategoryEntry> {
        &mut doc.skills_info
    }
}

impl Section for Other {
    type Entry = CategoryEntry;
    const LIST: ListName = ListName::OtherInfo;

    fn list(doc: &Document) -> &Vec<CategoryEntry> {
        &doc.other_info
    }

    fn list_mut(doc: &mut Document) -> &mut Vec<CategoryEntry> {
        &mut doc.other_info
    }
}
