/// Field validation rules shared by the entity constructors
pub mod validation;

/// In-memory, insertion-ordered inventory of household items
pub mod storage;

pub use storage::{ItemRef, Storage};
