use serde::{Deserialize, Serialize};

use crate::class::Class;
use crate::entity::Entity;
use crate::enumeration::Enum;

/// One snapshot of an API description: every class and every enumeration.
///
/// Names are not required to be unique. Lookups resolve duplicates to the
/// first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Root {
    #[serde(default)]
    pub classes: Vec<Class>,
    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl Root {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_enum(mut self, enumeration: Enum) -> Self {
        self.enums.push(enumeration);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty()
    }

    pub fn class_position(&self, name: &str) -> Option<usize> {
        self.classes.iter().position(|c| c.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&Class> {
        self.class_position(name).map(|i| &self.classes[i])
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut Class> {
        let i = self.class_position(name)?;
        Some(&mut self.classes[i])
    }

    pub fn enum_position(&self, name: &str) -> Option<usize> {
        self.enums.iter().position(|e| e.name == name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&Enum> {
        self.enum_position(name).map(|i| &self.enums[i])
    }

    pub fn enumeration_mut(&mut self, name: &str) -> Option<&mut Enum> {
        let i = self.enum_position(name)?;
        Some(&mut self.enums[i])
    }

    /// Put the tree into canonical order.
    ///
    /// Classes and enums are ordered by name, members by (name, kind), and
    /// enum items by name. Sorting is stable, so duplicates keep their
    /// relative order. Two snapshots describing the same API compare equal
    /// once both are sorted.
    pub fn sort(&mut self) {
        self.classes.sort_by(|a, b| a.name.cmp(&b.name));
        for class in &mut self.classes {
            class
                .members
                .sort_by(|a, b| (a.name(), a.member_kind()).cmp(&(b.name(), b.member_kind())));
        }
        self.enums.sort_by(|a, b| a.name.cmp(&b.name));
        for enumeration in &mut self.enums {
            enumeration.items.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    /// A sorted copy of the tree.
    pub fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::EnumItem;
    use crate::member::{Function, MemberKind, Property};
    use crate::value::Type;

    #[test]
    fn lookups_return_first_duplicate() {
        let root = Root::new()
            .with_class(Class::new("Foo").with_superclass("A"))
            .with_class(Class::new("Foo").with_superclass("B"));
        assert_eq!(root.class("Foo").unwrap().superclass, "A");
        assert!(root.class("Bar").is_none());
    }

    #[test]
    fn sorted_ignores_collection_order() {
        let a = Root::new()
            .with_class(
                Class::new("Zeta")
                    .with_member(Function::new("Run"))
                    .with_member(Property::new("Enabled", Type::new("bool"))),
            )
            .with_class(Class::new("Alpha"))
            .with_enum(
                Enum::new("Material")
                    .with_item(EnumItem::new("Wood", 0))
                    .with_item(EnumItem::new("Brick", 1)),
            );
        let b = Root::new()
            .with_enum(
                Enum::new("Material")
                    .with_item(EnumItem::new("Brick", 1))
                    .with_item(EnumItem::new("Wood", 0)),
            )
            .with_class(Class::new("Alpha"))
            .with_class(
                Class::new("Zeta")
                    .with_member(Property::new("Enabled", Type::new("bool")))
                    .with_member(Function::new("Run")),
            );
        assert_ne!(a, b);
        assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn sort_orders_same_name_members_by_kind() {
        let mut root = Root::new().with_class(
            Class::new("Tool")
                .with_member(Function::new("Activate"))
                .with_member(Property::new("Activate", Type::new("bool"))),
        );
        root.sort();
        let kinds: Vec<_> = root.classes[0]
            .members
            .iter()
            .map(|m| m.member_kind())
            .collect();
        assert_eq!(kinds, vec![MemberKind::Property, MemberKind::Function]);
    }
}
