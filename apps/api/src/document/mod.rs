// Committed résumé document: pure transitions, the list reorderer, and the
// store that owns the current snapshot and persists it after every change.

pub mod handlers;
pub mod ops;
pub mod reorder;
pub mod sections;
pub mod store;

pub use sections::{Education, Experience, Other, Section, Skills};
pub use store::DocumentStore;
