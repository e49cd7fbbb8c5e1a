pub mod document;
pub mod entries;

pub use document::{BasicField, ContactField, Document, ListName, SubItem};
pub use entries::{
    CategoryEntry, EducationEntry, EntryField, ExperienceEntry, FieldKind, FieldValue, ListEntry,
};
