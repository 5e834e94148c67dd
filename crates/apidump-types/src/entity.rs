//! The capability set every entity exposes.
//!
//! Diffing, patching, and inversion only ever talk to entities through the
//! [`Entity`] trait: a name, a kind, a tag set, and a bag of named fields
//! that can be read and written as [`Value`]s.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{FieldError, FieldResult};
use crate::tags::Tags;
use crate::value::Value;

/// Field names understood by the entity model.
pub mod field {
    pub const NAME: &str = "Name";
    pub const TAGS: &str = "Tags";

    pub const SUPERCLASS: &str = "Superclass";
    pub const MEMORY_CATEGORY: &str = "MemoryCategory";

    pub const VALUE_TYPE: &str = "ValueType";
    pub const READ_SECURITY: &str = "ReadSecurity";
    pub const WRITE_SECURITY: &str = "WriteSecurity";
    pub const CAN_LOAD: &str = "CanLoad";
    pub const CAN_SAVE: &str = "CanSave";

    pub const PARAMETERS: &str = "Parameters";
    pub const RETURN_TYPE: &str = "ReturnType";
    pub const SECURITY: &str = "Security";

    pub const VALUE: &str = "Value";
    pub const INDEX: &str = "Index";
}

/// A snapshot of an entity's fields, keyed by field name.
pub type Fields = BTreeMap<&'static str, Value>;

/// The kind of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Class,
    Property,
    Function,
    Event,
    Callback,
    Enum,
    EnumItem,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "Class"),
            Self::Property => write!(f, "Property"),
            Self::Function => write!(f, "Function"),
            Self::Event => write!(f, "Event"),
            Self::Callback => write!(f, "Callback"),
            Self::Enum => write!(f, "Enum"),
            Self::EnumItem => write!(f, "EnumItem"),
        }
    }
}

/// Generic access to a named, tagged entity and its fields.
pub trait Entity {
    /// The kind of this entity.
    fn kind(&self) -> EntityKind;

    fn name(&self) -> &str;

    fn tags(&self) -> &Tags;

    /// Names of every field this kind exposes, in diff order.
    fn field_names(&self) -> &'static [&'static str];

    /// Read a field. Returns `None` if this kind has no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Overwrite a single field, leaving every other field untouched.
    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()>;

    /// Read every field into a bag.
    fn fields(&self) -> Fields {
        self.field_names()
            .iter()
            .filter_map(|name| self.field(name).map(|value| (*name, value)))
            .collect()
    }

    /// Write every field of a bag, stopping at the first failure.
    fn set_fields(&mut self, fields: Fields) -> FieldResult<()> {
        for (name, value) in fields {
            self.set_field(name, value)?;
        }
        Ok(())
    }
}

pub(crate) fn unknown_field(entity: EntityKind, field: &str) -> FieldError {
    FieldError::UnknownField {
        entity,
        field: field.to_string(),
    }
}

pub(crate) fn tags_from_value(field: &str, value: Value) -> FieldResult<Tags> {
    Ok(value.into_tags(field)?.into_iter().collect())
}
