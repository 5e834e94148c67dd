//! Actions: the units of structural difference between two snapshots.
//!
//! An [`Action`] targets one entity by identity and either adds it, removes
//! it, or changes one of its fields. The `Display` impl renders the line
//! format consumed by changelog tooling:
//!
//! ```text
//! Add Class Widget
//! Remove Property Part.Locked [Deprecated]
//! Change field Superclass of Class Part from "" to "BasePart"
//! ```

use std::fmt;

use apidump_types::{Class, Entity, EntityKind, Enum, EnumItem, Member, MemberKind, Tags, Value};

/// The operation an action performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Remove,
    Change,
}

impl Op {
    /// The operation that undoes this one.
    pub fn flip(self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
            Self::Change => Self::Change,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Remove => write!(f, "Remove"),
            Self::Change => write!(f, "Change"),
        }
    }
}

/// The identity of the entity an action applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Class {
        name: String,
    },
    Member {
        class: String,
        kind: MemberKind,
        name: String,
    },
    Enum {
        name: String,
    },
    EnumItem {
        enumeration: String,
        name: String,
    },
}

impl Target {
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class { name: name.into() }
    }

    pub fn member(class: impl Into<String>, kind: MemberKind, name: impl Into<String>) -> Self {
        Self::Member {
            class: class.into(),
            kind,
            name: name.into(),
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enum { name: name.into() }
    }

    pub fn enum_item(enumeration: impl Into<String>, name: impl Into<String>) -> Self {
        Self::EnumItem {
            enumeration: enumeration.into(),
            name: name.into(),
        }
    }

    /// Kind of the targeted entity.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Class { .. } => EntityKind::Class,
            Self::Member { kind, .. } => (*kind).into(),
            Self::Enum { .. } => EntityKind::Enum,
            Self::EnumItem { .. } => EntityKind::EnumItem,
        }
    }

    /// Name of the targeted entity.
    pub fn name(&self) -> &str {
        match self {
            Self::Class { name }
            | Self::Member { name, .. }
            | Self::Enum { name }
            | Self::EnumItem { name, .. } => name,
        }
    }

    /// Name of the class or enum that owns the entity, if it is nested.
    pub fn owner(&self) -> Option<&str> {
        match self {
            Self::Class { .. } | Self::Enum { .. } => None,
            Self::Member { class, .. } => Some(class),
            Self::EnumItem { enumeration, .. } => Some(enumeration),
        }
    }

    /// The same target with the entity name replaced.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        let mut target = self.clone();
        match &mut target {
            Self::Class { name: n }
            | Self::Member { name: n, .. }
            | Self::Enum { name: n }
            | Self::EnumItem { name: n, .. } => *n = name.into(),
        }
        target
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind())?;
        if let Some(owner) = self.owner() {
            write!(f, "{owner}.")?;
        }
        f.write_str(self.name())
    }
}

/// A complete entity carried by an Add or Remove action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Class(Class),
    Member(Member),
    Enum(Enum),
    EnumItem(EnumItem),
}

impl Payload {
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            Self::Class(e) => e,
            Self::Member(e) => e,
            Self::Enum(e) => e,
            Self::EnumItem(e) => e,
        }
    }

    pub fn tags(&self) -> &Tags {
        self.as_entity().tags()
    }
}

/// One structural difference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Insert an entity. `payload` is the entity to insert; it is `None` only
    /// when an inverse could not recover the entity.
    Add {
        target: Target,
        payload: Option<Payload>,
    },
    /// Delete an entity. `payload` describes what was removed, when known.
    Remove {
        target: Target,
        payload: Option<Payload>,
    },
    /// Overwrite one named field.
    Change {
        target: Target,
        field: String,
        prev: Value,
        next: Value,
    },
}

impl Action {
    pub fn add(target: Target, payload: Payload) -> Self {
        Self::Add {
            target,
            payload: Some(payload),
        }
    }

    pub fn remove(target: Target, payload: Payload) -> Self {
        Self::Remove {
            target,
            payload: Some(payload),
        }
    }

    pub fn change(target: Target, field: impl Into<String>, prev: Value, next: Value) -> Self {
        Self::Change {
            target,
            field: field.into(),
            prev,
            next,
        }
    }

    pub fn op(&self) -> Op {
        match self {
            Self::Add { .. } => Op::Add,
            Self::Remove { .. } => Op::Remove,
            Self::Change { .. } => Op::Change,
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Self::Add { target, .. }
            | Self::Remove { target, .. }
            | Self::Change { target, .. } => target,
        }
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Add { payload, .. } | Self::Remove { payload, .. } => payload.as_ref(),
            Self::Change { .. } => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { target, payload } | Self::Remove { target, payload } => {
                write!(f, "{} {target}", self.op())?;
                if let Some(payload) = payload {
                    if !payload.tags().is_empty() {
                        write!(f, " {}", payload.tags())?;
                    }
                }
                Ok(())
            }
            Self::Change {
                target,
                field,
                prev,
                next,
            } => write!(f, "Change field {field} of {target} from {prev} to {next}"),
        }
    }
}

/// Counts of each operation in an action list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl ActionSummary {
    pub fn of(actions: &[Action]) -> Self {
        let mut summary = Self::default();
        for action in actions {
            match action.op() {
                Op::Add => summary.added += 1,
                Op::Remove => summary.removed += 1,
                Op::Change => summary.changed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
