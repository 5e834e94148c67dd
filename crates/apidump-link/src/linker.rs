//! Ordinal matching of entities across two roots.
//!
//! Within each scope (the classes of a root, the members of a linked class
//! pair, the enums of a root, the items of a linked enum pair), every entity
//! gets an identity key and an ordinal: the number of entities with the same
//! key that precede it in the same list. Two entities correspond when both
//! key and ordinal are equal. Nested scopes are only visited for linked
//! parents.

use std::collections::HashMap;
use std::hash::Hash;

use apidump_types::{Entity, Root};
use tracing::debug;

use crate::links::{EntityRef, Links};

/// Link the entities of `a` to those of `b`.
pub fn link(a: &Root, b: &Root) -> Links {
    let mut links = Links::new();

    for (ai, bi) in match_ordinals(&a.classes, &b.classes, |c| c.name.as_str()) {
        links.insert(EntityRef::Class(ai), EntityRef::Class(bi));
        let (ca, cb) = (&a.classes[ai], &b.classes[bi]);
        let members = match_ordinals(&ca.members, &cb.members, |m| (m.member_kind(), m.name()));
        for (am, bm) in members {
            links.insert(
                EntityRef::Member {
                    class: ai,
                    member: am,
                },
                EntityRef::Member {
                    class: bi,
                    member: bm,
                },
            );
        }
    }

    for (ai, bi) in match_ordinals(&a.enums, &b.enums, |e| e.name.as_str()) {
        links.insert(EntityRef::Enum(ai), EntityRef::Enum(bi));
        let (ea, eb) = (&a.enums[ai], &b.enums[bi]);
        for (ia, ib) in match_ordinals(&ea.items, &eb.items, |i| i.name.as_str()) {
            links.insert(
                EntityRef::EnumItem {
                    enumeration: ai,
                    item: ia,
                },
                EntityRef::EnumItem {
                    enumeration: bi,
                    item: ib,
                },
            );
        }
    }

    debug!(links = links.len(), "snapshots linked");
    links
}

/// Pair up positions of `a` and `b` whose keys and ordinals agree.
///
/// Pairs are returned in `a` order.
pub fn match_ordinals<'a, T, K>(
    a: &'a [T],
    b: &'a [T],
    key: impl Fn(&'a T) -> K,
) -> Vec<(usize, usize)>
where
    K: Eq + Hash + Clone,
{
    let slots: HashMap<(K, usize), usize> = with_ordinals(b.iter().map(&key))
        .into_iter()
        .enumerate()
        .map(|(j, slot)| (slot, j))
        .collect();

    with_ordinals(a.iter().map(&key))
        .into_iter()
        .enumerate()
        .filter_map(|(i, slot)| slots.get(&slot).map(|&j| (i, j)))
        .collect()
}

fn with_ordinals<K: Eq + Hash + Clone>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut seen: HashMap<K, usize> = HashMap::new();
    keys.map(|k| {
        let count = seen.entry(k.clone()).or_insert(0);
        let ordinal = *count;
        *count += 1;
        (k, ordinal)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidump_types::{Class, Enum, EnumItem, Event, Function, Property, Type};
    use proptest::prelude::*;

    fn classes(names: &[&str]) -> Root {
        names
            .iter()
            .fold(Root::new(), |root, name| root.with_class(Class::new(*name)))
    }

    #[test]
    fn duplicate_names_match_by_ordinal() {
        let a = classes(&["Foo", "Foo", "Bar"]);
        let b = classes(&["Foo", "Bar", "Foo"]);

        let links = link(&a, &b);
        assert_eq!(links.forward(&EntityRef::Class(0)), Some(EntityRef::Class(0)));
        assert_eq!(links.forward(&EntityRef::Class(1)), Some(EntityRef::Class(2)));
        assert_eq!(links.forward(&EntityRef::Class(2)), Some(EntityRef::Class(1)));
        assert_eq!(links.backward(&EntityRef::Class(2)), Some(EntityRef::Class(1)));
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn surplus_duplicates_stay_unlinked() {
        let a = classes(&["Foo", "Foo", "Foo"]);
        let b = classes(&["Foo"]);
        let links = link(&a, &b);
        assert_eq!(links.pairs(), vec![(EntityRef::Class(0), EntityRef::Class(0))]);
        assert_eq!(links.forward(&EntityRef::Class(1)), None);
    }

    #[test]
    fn members_link_by_kind_and_name() {
        let a = Root::new().with_class(
            Class::new("Tool")
                .with_member(Property::new("Activate", Type::new("bool")))
                .with_member(Event::new("Activate")),
        );
        let b = Root::new().with_class(
            Class::new("Tool")
                .with_member(Event::new("Activate"))
                .with_member(Function::new("Activate"))
                .with_member(Property::new("Activate", Type::new("int"))),
        );

        let links = link(&a, &b);
        assert_eq!(
            links.forward(&EntityRef::Member { class: 0, member: 0 }),
            Some(EntityRef::Member { class: 0, member: 2 })
        );
        assert_eq!(
            links.forward(&EntityRef::Member { class: 0, member: 1 }),
            Some(EntityRef::Member { class: 0, member: 0 })
        );
        assert_eq!(
            links.backward(&EntityRef::Member { class: 0, member: 1 }),
            None
        );
    }

    #[test]
    fn children_of_unmatched_parents_stay_unlinked() {
        let a = Root::new()
            .with_class(Class::new("Old").with_member(Function::new("Run")))
            .with_enum(Enum::new("Axis").with_item(EnumItem::new("X", 0)));
        let b = Root::new()
            .with_class(Class::new("New").with_member(Function::new("Run")))
            .with_enum(Enum::new("Axis").with_item(EnumItem::new("X", 7)));

        let links = link(&a, &b);
        assert_eq!(
            links.pairs(),
            vec![
                (EntityRef::Enum(0), EntityRef::Enum(0)),
                (
                    EntityRef::EnumItem { enumeration: 0, item: 0 },
                    EntityRef::EnumItem { enumeration: 0, item: 0 },
                ),
            ]
        );
    }

    #[test]
    fn nested_scopes_use_parent_positions() {
        let a = Root::new()
            .with_class(Class::new("Foo").with_member(Function::new("A")))
            .with_class(Class::new("Foo").with_member(Function::new("B")));
        let b = Root::new()
            .with_class(Class::new("Bar"))
            .with_class(Class::new("Foo").with_member(Function::new("A")))
            .with_class(Class::new("Foo").with_member(Function::new("B")));

        let links = link(&a, &b);
        let linked = links
            .forward(&EntityRef::Member { class: 1, member: 0 })
            .unwrap();
        assert_eq!(linked, EntityRef::Member { class: 2, member: 0 });
        assert_eq!(linked.resolve(&b).unwrap().name(), "B");
    }

    /// Pairwise definition: compare every entity with every other.
    fn naive(a: &[&str], b: &[&str]) -> Vec<(usize, usize)> {
        let ordinal = |list: &[&str], i: usize| list[..i].iter().filter(|n| **n == list[i]).count();
        let mut pairs = Vec::new();
        for i in 0..a.len() {
            for j in 0..b.len() {
                if a[i] == b[j] && ordinal(a, i) == ordinal(b, j) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    const NAMES: &[&str] = &["Foo", "Bar", "Baz"];

    proptest! {
        #[test]
        fn hashed_matching_agrees_with_pairwise(
            a in proptest::collection::vec(prop::sample::select(NAMES), 0..8),
            b in proptest::collection::vec(prop::sample::select(NAMES), 0..8),
        ) {
            let hashed = match_ordinals(&a, &b, |n| *n);
            prop_assert_eq!(hashed, naive(&a, &b));
        }
    }
}
