//! Snapshot diff: compare two roots and produce an ordered action list.
//!
//! Entities are matched by identity: name for classes, enums, and enum
//! items; (kind, name) for members. At every level, identities are visited
//! in name order so the output is deterministic regardless of the order of
//! the underlying collections. When a collection holds duplicate names, only
//! the first occurrence takes part in the diff.
//!
//! Whole entities that exist on one side only produce a single Add or Remove
//! carrying the complete entity; nothing nested inside them is reported
//! separately.

use std::collections::{BTreeMap, BTreeSet};

use apidump_types::{field, Class, Entity, Enum, EnumItem, Member, MemberKind, Root, Value};
use tracing::debug;

use crate::action::{Action, Payload, Target};
use crate::config::DiffConfig;

/// Computes actions that transform one snapshot into another.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff two snapshots. A missing root is treated as an empty one.
    pub fn diff(&self, prev: Option<&Root>, next: Option<&Root>) -> Vec<Action> {
        let empty = Root::default();
        let prev = prev.unwrap_or(&empty);
        let next = next.unwrap_or(&empty);

        let mut actions = Vec::new();
        self.diff_classes(&prev.classes, &next.classes, &mut actions);
        self.diff_enums(&prev.enums, &next.enums, &mut actions);

        debug!(actions = actions.len(), "snapshot diff complete");
        actions
    }

    /// Diff two versions of a class.
    ///
    /// The classes are compared as-is even if their names differ; a rename
    /// shows up as a `Name` change, and every later action targets the new
    /// name.
    pub fn diff_class(&self, prev: &Class, next: &Class) -> Vec<Action> {
        let mut actions = Vec::new();
        self.diff_class_into(prev, next, &mut actions);
        actions
    }

    /// Diff two versions of a member of `class`.
    ///
    /// Members of different kinds share no fields, so a kind change is
    /// reported as a Remove of the old member followed by an Add of the new.
    pub fn diff_member(&self, class: &str, prev: &Member, next: &Member) -> Vec<Action> {
        let mut actions = Vec::new();
        diff_member_into(class, prev, next, &mut actions);
        actions
    }

    /// Diff two versions of an enum.
    pub fn diff_enum(&self, prev: &Enum, next: &Enum) -> Vec<Action> {
        let mut actions = Vec::new();
        self.diff_enum_into(prev, next, &mut actions);
        actions
    }

    /// Diff two versions of an item of `enumeration`.
    pub fn diff_enum_item(
        &self,
        enumeration: &str,
        prev: &EnumItem,
        next: &EnumItem,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        diff_fields(
            Target::enum_item(enumeration, &prev.name),
            prev,
            next,
            &mut actions,
        );
        actions
    }

    fn diff_classes(&self, prev: &[Class], next: &[Class], out: &mut Vec<Action>) {
        let prev = first_by_key(prev, |c| c.name.as_str());
        let next = first_by_key(next, |c| c.name.as_str());

        for name in union_keys(&prev, &next) {
            match (prev.get(name), next.get(name)) {
                (Some(p), Some(n)) => self.diff_class_into(p, n, out),
                (Some(p), None) => {
                    debug!(class = name, "class removed");
                    out.push(Action::remove(Target::class(name), Payload::Class((*p).clone())));
                }
                (None, Some(n)) => {
                    debug!(class = name, "class added");
                    out.push(Action::add(Target::class(name), Payload::Class((*n).clone())));
                }
                (None, None) => {}
            }
        }
    }

    fn diff_class_into(&self, prev: &Class, next: &Class, out: &mut Vec<Action>) {
        diff_fields(Target::class(&prev.name), prev, next, out);
        if self.config.exclude_members {
            return;
        }

        let class = next.name.as_str();
        let prev = first_by_key(&prev.members, |m| (m.name(), m.member_kind()));
        let next = first_by_key(&next.members, |m| (m.name(), m.member_kind()));
        let names: BTreeSet<&str> = prev.keys().chain(next.keys()).map(|(name, _)| *name).collect();

        for name in names {
            let mut removed = Vec::new();
            let mut added = Vec::new();
            for kind in MemberKind::ALL {
                match (prev.get(&(name, kind)), next.get(&(name, kind))) {
                    (Some(p), Some(n)) => diff_member_into(class, p, n, out),
                    (Some(p), None) => removed.push(*p),
                    (None, Some(n)) => added.push(*n),
                    (None, None) => {}
                }
            }
            for member in removed {
                out.push(remove_member(class, member));
            }
            for member in added {
                out.push(add_member(class, member));
            }
        }
    }

    fn diff_enums(&self, prev: &[Enum], next: &[Enum], out: &mut Vec<Action>) {
        let prev = first_by_key(prev, |e| e.name.as_str());
        let next = first_by_key(next, |e| e.name.as_str());

        for name in union_keys(&prev, &next) {
            match (prev.get(name), next.get(name)) {
                (Some(p), Some(n)) => self.diff_enum_into(p, n, out),
                (Some(p), None) => {
                    debug!(enumeration = name, "enum removed");
                    out.push(Action::remove(
                        Target::enumeration(name),
                        Payload::Enum((*p).clone()),
                    ));
                }
                (None, Some(n)) => {
                    debug!(enumeration = name, "enum added");
                    out.push(Action::add(Target::enumeration(name), Payload::Enum((*n).clone())));
                }
                (None, None) => {}
            }
        }
    }

    fn diff_enum_into(&self, prev: &Enum, next: &Enum, out: &mut Vec<Action>) {
        diff_fields(Target::enumeration(&prev.name), prev, next, out);
        if self.config.exclude_items {
            return;
        }

        let enumeration = next.name.as_str();
        let prev = first_by_key(&prev.items, |i| i.name.as_str());
        let next = first_by_key(&next.items, |i| i.name.as_str());

        for name in union_keys(&prev, &next) {
            let target = Target::enum_item(enumeration, name);
            match (prev.get(name), next.get(name)) {
                (Some(p), Some(n)) => diff_fields(target, *p, *n, out),
                (Some(p), None) => {
                    out.push(Action::remove(target, Payload::EnumItem((*p).clone())))
                }
                (None, Some(n)) => out.push(Action::add(target, Payload::EnumItem((*n).clone()))),
                (None, None) => {}
            }
        }
    }
}

/// Diff two snapshots with the default configuration.
pub fn diff(prev: Option<&Root>, next: Option<&Root>) -> Vec<Action> {
    Differ::default().diff(prev, next)
}

fn diff_member_into(class: &str, prev: &Member, next: &Member, out: &mut Vec<Action>) {
    if prev.member_kind() != next.member_kind() {
        out.push(remove_member(class, prev));
        out.push(add_member(class, next));
        return;
    }
    diff_fields(
        Target::member(class, prev.member_kind(), prev.name()),
        prev,
        next,
        out,
    );
}

fn remove_member(class: &str, member: &Member) -> Action {
    Action::remove(
        Target::member(class, member.member_kind(), member.name()),
        Payload::Member(member.clone()),
    )
}

fn add_member(class: &str, member: &Member) -> Action {
    Action::add(
        Target::member(class, member.member_kind(), member.name()),
        Payload::Member(member.clone()),
    )
}

/// Emit one Change per differing field, in the entity's field order.
///
/// A `Name` change renames the target for every field after it.
fn diff_fields(mut target: Target, prev: &dyn Entity, next: &dyn Entity, out: &mut Vec<Action>) {
    for &name in prev.field_names() {
        let (Some(p), Some(n)) = (prev.field(name), next.field(name)) else {
            continue;
        };
        if p == n {
            continue;
        }
        let renamed = match (name, &n) {
            (field::NAME, Value::String(new_name)) => Some(target.renamed(new_name.as_str())),
            _ => None,
        };
        out.push(Action::change(target.clone(), name, p, n));
        if let Some(renamed) = renamed {
            target = renamed;
        }
    }
}

fn first_by_key<'a, T, K: Ord>(items: &'a [T], key: impl Fn(&'a T) -> K) -> BTreeMap<K, &'a T> {
    let mut map = BTreeMap::new();
    for item in items {
        map.entry(key(item)).or_insert(item);
    }
    map
}

fn union_keys<'a, T>(a: &BTreeMap<&'a str, T>, b: &BTreeMap<&'a str, T>) -> BTreeSet<&'a str> {
    a.keys().chain(b.keys()).copied().collect()
}
