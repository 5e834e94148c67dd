use serde::{Deserialize, Serialize};

use crate::entity::{field, tags_from_value, unknown_field, Entity, EntityKind};
use crate::error::FieldResult;
use crate::member::{Member, MemberKind};
use crate::tags::Tags;
use crate::value::Value;

const CLASS_FIELDS: &[&str] = &[
    field::NAME,
    field::SUPERCLASS,
    field::MEMORY_CATEGORY,
    field::TAGS,
];

/// A class and its members.
///
/// `superclass` is a plain name. It is never resolved against the rest of the
/// tree, may refer to a class that does not exist, and is empty for root
/// classes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Class {
    pub name: String,
    pub superclass: String,
    pub memory_category: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub tags: Tags,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = superclass.into();
        self
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Apply [`Member::normalize`] to every member.
    pub fn normalize(&mut self) {
        self.members.iter_mut().for_each(Member::normalize);
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Position of the first member with the given identity.
    pub fn member_position(&self, kind: MemberKind, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|m| m.member_kind() == kind && m.name() == name)
    }

    /// First member with the given identity.
    pub fn member(&self, kind: MemberKind, name: &str) -> Option<&Member> {
        self.member_position(kind, name).map(|i| &self.members[i])
    }

    pub fn member_mut(&mut self, kind: MemberKind, name: &str) -> Option<&mut Member> {
        let i = self.member_position(kind, name)?;
        Some(&mut self.members[i])
    }
}

impl Entity for Class {
    fn kind(&self) -> EntityKind {
        EntityKind::Class
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        CLASS_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::SUPERCLASS => Value::String(self.superclass.clone()),
            field::MEMORY_CATEGORY => Value::String(self.memory_category.clone()),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::SUPERCLASS => self.superclass = value.into_string(name)?,
            field::MEMORY_CATEGORY => self.memory_category = value.into_string(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}
