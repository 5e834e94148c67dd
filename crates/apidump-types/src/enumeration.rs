use serde::{Deserialize, Serialize};

use crate::entity::{field, tags_from_value, unknown_field, Entity, EntityKind};
use crate::error::FieldResult;
use crate::tags::Tags;
use crate::value::Value;

const ENUM_FIELDS: &[&str] = &[field::NAME, field::TAGS];

const ENUM_ITEM_FIELDS: &[&str] = &[field::NAME, field::VALUE, field::INDEX, field::TAGS];

/// An enumeration and its items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub items: Vec<EnumItem>,
    #[serde(default)]
    pub tags: Tags,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_item(mut self, item: EnumItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn item_position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// First item with the given name.
    pub fn item(&self, name: &str) -> Option<&EnumItem> {
        self.item_position(name).map(|i| &self.items[i])
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut EnumItem> {
        let i = self.item_position(name)?;
        Some(&mut self.items[i])
    }
}

impl Entity for Enum {
    fn kind(&self) -> EntityKind {
        EntityKind::Enum
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        ENUM_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}

/// A named value of an enumeration.
///
/// `index` only orders items for presentation; identity is the name alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumItem {
    pub name: String,
    pub value: i64,
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub tags: Tags,
}

impl EnumItem {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            ..Default::default()
        }
    }

    pub fn with_index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }
}

impl Entity for EnumItem {
    fn kind(&self) -> EntityKind {
        EntityKind::EnumItem
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn field_names(&self) -> &'static [&'static str] {
        ENUM_ITEM_FIELDS
    }

    fn field(&self, name: &str) -> Option<Value> {
        Some(match name {
            field::NAME => Value::String(self.name.clone()),
            field::VALUE => Value::Int(self.value),
            field::INDEX => Value::Int(self.index),
            field::TAGS => self.tags.to_value(),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, value: Value) -> FieldResult<()> {
        match name {
            field::NAME => self.name = value.into_string(name)?,
            field::VALUE => self.value = value.into_int(name)?,
            field::INDEX => self.index = value.into_int(name)?,
            field::TAGS => self.tags = tags_from_value(name, value)?,
            _ => return Err(unknown_field(self.kind(), name)),
        }
        Ok(())
    }
}
