use std::collections::HashMap;

use apidump_types::{Entity, Root};

/// Address of an entity by its position within a root.
///
/// Positions identify entities even when several share a name or are equal
/// by value. A reference is only meaningful for the root it was built from,
/// and only until that root is mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityRef {
    Class(usize),
    Member { class: usize, member: usize },
    Enum(usize),
    EnumItem { enumeration: usize, item: usize },
}

impl EntityRef {
    /// The entity this reference points to in `root`.
    pub fn resolve<'a>(&self, root: &'a Root) -> Option<&'a dyn Entity> {
        match *self {
            Self::Class(i) => root.classes.get(i).map(|c| c as &dyn Entity),
            Self::Member { class, member } => root
                .classes
                .get(class)?
                .members
                .get(member)
                .map(|m| m as &dyn Entity),
            Self::Enum(i) => root.enums.get(i).map(|e| e as &dyn Entity),
            Self::EnumItem { enumeration, item } => root
                .enums
                .get(enumeration)?
                .items
                .get(item)
                .map(|i| i as &dyn Entity),
        }
    }
}

/// A bidirectional correspondence between entities of two roots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links {
    forward: HashMap<EntityRef, EntityRef>,
    backward: HashMap<EntityRef, EntityRef>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, a: EntityRef, b: EntityRef) {
        self.forward.insert(a, b);
        self.backward.insert(b, a);
    }

    /// The entity in the second root linked to `a` in the first.
    pub fn forward(&self, a: &EntityRef) -> Option<EntityRef> {
        self.forward.get(a).copied()
    }

    /// The entity in the first root linked to `b` in the second.
    pub fn backward(&self, b: &EntityRef) -> Option<EntityRef> {
        self.backward.get(b).copied()
    }

    /// Number of linked pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Every linked pair, ordered by the first root's references.
    pub fn pairs(&self) -> Vec<(EntityRef, EntityRef)> {
        let mut pairs: Vec<_> = self.forward.iter().map(|(a, b)| (*a, *b)).collect();
        pairs.sort();
        pairs
    }
}
