//! Comparable field values.
//!
//! Every field that can be read or written through the field bag is carried as
//! a [`Value`]. Equality is tag-aware (values of different kinds are never
//! equal) and deep otherwise; `Display` produces the canonical rendering used
//! by changelog output.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// A value type reference, e.g. `int` or `Class:Instance`.
///
/// Equality is structural over both the category and the name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Type {
    /// Optional classification (`Primitive`, `Class`, `Enum`, ...).
    pub category: Option<String>,
    pub name: String,
}

impl Type {
    /// A type with no category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category: None,
            name: name.into(),
        }
    }

    /// A type with an explicit category.
    pub fn with_category(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A function, event, or callback parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(rename = "Type")]
    pub ty: Type,
    pub name: String,
    /// Default value text, if the parameter declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Parameter {
    /// A parameter without a default.
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            default: None,
        }
    }

    /// Attach a default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

/// The tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    String,
    Type,
    Tags,
    Parameters,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::String => write!(f, "string"),
            Self::Type => write!(f, "type"),
            Self::Tags => write!(f, "tags"),
            Self::Parameters => write!(f, "parameters"),
        }
    }
}

/// A field value of any type appearing in the entity model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),
    Type(Type),
    /// Tags in canonical (sorted, deduplicated) order.
    Tags(Vec<String>),
    Parameters(Vec<Parameter>),
}

impl Value {
    /// The tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::String(_) => ValueKind::String,
            Self::Type(_) => ValueKind::Type,
            Self::Tags(_) => ValueKind::Tags,
            Self::Parameters(_) => ValueKind::Parameters,
        }
    }

    /// Canonical text form. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn mismatch(self, field: &str, expected: ValueKind) -> FieldError {
        FieldError::TypeMismatch {
            field: field.to_string(),
            expected,
            actual: self.kind(),
        }
    }

    pub fn into_bool(self, field: &str) -> FieldResult<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(other.mismatch(field, ValueKind::Bool)),
        }
    }

    pub fn into_int(self, field: &str) -> FieldResult<i64> {
        match self {
            Self::Int(i) => Ok(i),
            other => Err(other.mismatch(field, ValueKind::Int)),
        }
    }

    pub fn into_string(self, field: &str) -> FieldResult<String> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(field, ValueKind::String)),
        }
    }

    pub fn into_type(self, field: &str) -> FieldResult<Type> {
        match self {
            Self::Type(t) => Ok(t),
            other => Err(other.mismatch(field, ValueKind::Type)),
        }
    }

    pub fn into_tags(self, field: &str) -> FieldResult<Vec<String>> {
        match self {
            Self::Tags(t) => Ok(t),
            other => Err(other.mismatch(field, ValueKind::Tags)),
        }
    }

    pub fn into_parameters(self, field: &str) -> FieldResult<Vec<Parameter>> {
        match self {
            Self::Parameters(p) => Ok(p),
            other => Err(other.mismatch(field, ValueKind::Parameters)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Type(t) => write!(f, "{t}"),
            Self::Tags(tags) => write!(f, "[{}]", tags.join(", ")),
            Self::Parameters(params) => {
                f.write_str("(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{p}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Type> for Value {
    fn from(t: Type) -> Self {
        Self::Type(t)
    }
}

impl From<Vec<Parameter>> for Value {
    fn from(p: Vec<Parameter>) -> Self {
        Self::Parameters(p)
    }
}
