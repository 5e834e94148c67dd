//! Resolve action targets against a root.

use apidump_diff::{Payload, Target};
use apidump_types::{Entity, Root};

/// The entity a target identifies, if present.
pub fn entity<'a>(root: &'a Root, target: &Target) -> Option<&'a dyn Entity> {
    match target {
        Target::Class { name } => root.class(name).map(|c| c as &dyn Entity),
        Target::Member { class, kind, name } => root
            .class(class)?
            .member(*kind, name)
            .map(|m| m as &dyn Entity),
        Target::Enum { name } => root.enumeration(name).map(|e| e as &dyn Entity),
        Target::EnumItem { enumeration, name } => root
            .enumeration(enumeration)?
            .item(name)
            .map(|i| i as &dyn Entity),
    }
}

pub fn entity_mut<'a>(root: &'a mut Root, target: &Target) -> Option<&'a mut dyn Entity> {
    match target {
        Target::Class { name } => root.class_mut(name).map(|c| c as &mut dyn Entity),
        Target::Member { class, kind, name } => root
            .class_mut(class)?
            .member_mut(*kind, name)
            .map(|m| m as &mut dyn Entity),
        Target::Enum { name } => root.enumeration_mut(name).map(|e| e as &mut dyn Entity),
        Target::EnumItem { enumeration, name } => root
            .enumeration_mut(enumeration)?
            .item_mut(name)
            .map(|i| i as &mut dyn Entity),
    }
}

/// A copy of the entity a target identifies, suitable for an Add.
pub fn payload(root: &Root, target: &Target) -> Option<Payload> {
    match target {
        Target::Class { name } => root.class(name).cloned().map(Payload::Class),
        Target::Member { class, kind, name } => root
            .class(class)?
            .member(*kind, name)
            .cloned()
            .map(Payload::Member),
        Target::Enum { name } => root.enumeration(name).cloned().map(Payload::Enum),
        Target::EnumItem { enumeration, name } => root
            .enumeration(enumeration)?
            .item(name)
            .cloned()
            .map(Payload::EnumItem),
    }
}
