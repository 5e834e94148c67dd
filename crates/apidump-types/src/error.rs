//! Error types for the field-bag capability.

use thiserror::Error;

use crate::entity::EntityKind;
use crate::value::ValueKind;

/// Errors produced when writing a named field through [`crate::Entity::set_field`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The entity kind does not expose a field with this name.
    #[error("{entity} has no field {field:?}")]
    UnknownField { entity: EntityKind, field: String },

    /// The field exists but the value carries a different tag.
    #[error("field {field:?} expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Convenience alias for field-bag results.
pub type FieldResult<T> = Result<T, FieldError>;
