//! Entity to model mappers
//!
//! - `From<&Entity> for Model`: prepare a snapshot for writing
//! - `TryFrom<Model> for Entity`: rebuild domain objects from the file,
//!   rejecting records that break entity invariants

mod comment;
