//! Apply action lists to a snapshot.
//!
//! Actions are applied strictly in order, so later actions may rely on
//! earlier ones (an Add of a class must precede Adds of its members).
//! Patching is lenient: an action that cannot apply cleanly leaves the tree
//! untouched and is recorded in the [`PatchReport`] instead of failing.
//!
//! - Add inserts a copy of the carried entity unless one with the same
//!   identity already exists. The carried entity must have the target's
//!   identity, and is normalized on the way in.
//! - Remove deletes the first entity with the target identity, if any.
//! - Change overwrites exactly one field of the target.

use apidump_diff::{Action, Payload, Target};
use apidump_types::Root;
use tracing::debug;

use crate::error::SkipReason;
use crate::locate;

/// An action that left the tree untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedAction {
    /// Position of the action in the patched list.
    pub index: usize,
    pub reason: SkipReason,
}

/// Outcome of a patch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Number of actions that modified the tree.
    pub applied: usize,
    pub skipped: Vec<SkippedAction>,
}

impl PatchReport {
    /// Returns `true` if every action applied.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Apply `actions` to `root` in order.
pub fn patch(root: &mut Root, actions: &[Action]) -> PatchReport {
    let mut report = PatchReport::default();

    for (index, action) in actions.iter().enumerate() {
        match apply(root, action) {
            Ok(()) => {
                debug!(index, action = %action, "action applied");
                report.applied += 1;
            }
            Err(reason) => {
                debug!(index, action = %action, reason = %reason, "action skipped");
                report.skipped.push(SkippedAction { index, reason });
            }
        }
    }

    report
}

/// Apply `actions` to `root`, starting from an empty root if there is none.
pub fn patch_or_new(root: Option<Root>, actions: &[Action]) -> Root {
    let mut root = root.unwrap_or_default();
    patch(&mut root, actions);
    root
}

fn apply(root: &mut Root, action: &Action) -> Result<(), SkipReason> {
    match action {
        Action::Add { target, payload } => {
            let payload = payload.as_ref().ok_or(SkipReason::MissingPayload)?;
            add(root, target, payload)
        }
        Action::Remove { target, .. } => remove(root, target),
        Action::Change {
            target,
            field,
            next,
            ..
        } => {
            let entity = locate::entity_mut(root, target).ok_or(SkipReason::TargetMissing)?;
            entity.set_field(field, next.clone())?;
            Ok(())
        }
    }
}

fn add(root: &mut Root, target: &Target, payload: &Payload) -> Result<(), SkipReason> {
    let carried = payload.as_entity().name();
    if carried != target.name() {
        return Err(SkipReason::NameMismatch {
            target: target.name().to_string(),
            payload: carried.to_string(),
        });
    }

    match (target, payload) {
        (Target::Class { name }, Payload::Class(class)) => {
            if root.class(name).is_some() {
                return Err(SkipReason::AlreadyExists);
            }
            let mut class = class.clone();
            class.normalize();
            root.classes.push(class);
        }
        (Target::Member { class, kind, name }, Payload::Member(member))
            if member.member_kind() == *kind =>
        {
            let owner = root
                .class_mut(class)
                .ok_or_else(|| SkipReason::OwnerMissing(class.clone()))?;
            if owner.member(*kind, name).is_some() {
                return Err(SkipReason::AlreadyExists);
            }
            owner.members.push(member.normalized());
        }
        (Target::Enum { name }, Payload::Enum(enumeration)) => {
            if root.enumeration(name).is_some() {
                return Err(SkipReason::AlreadyExists);
            }
            root.enums.push(enumeration.clone());
        }
        (Target::EnumItem { enumeration, name }, Payload::EnumItem(item)) => {
            let owner = root
                .enumeration_mut(enumeration)
                .ok_or_else(|| SkipReason::OwnerMissing(enumeration.clone()))?;
            if owner.item(name).is_some() {
                return Err(SkipReason::AlreadyExists);
            }
            owner.items.push(item.clone());
        }
        (target, payload) => {
            return Err(SkipReason::PayloadMismatch {
                target: target.kind(),
                payload: payload.as_entity().kind(),
            })
        }
    }
    Ok(())
}

fn remove(root: &mut Root, target: &Target) -> Result<(), SkipReason> {
    match target {
        Target::Class { name } => {
            let i = root.class_position(name).ok_or(SkipReason::TargetMissing)?;
            root.classes.remove(i);
        }
        Target::Member { class, kind, name } => {
            let owner = root.class_mut(class).ok_or(SkipReason::TargetMissing)?;
            let i = owner
                .member_position(*kind, name)
                .ok_or(SkipReason::TargetMissing)?;
            owner.members.remove(i);
        }
        Target::Enum { name } => {
            let i = root.enum_position(name).ok_or(SkipReason::TargetMissing)?;
            root.enums.remove(i);
        }
        Target::EnumItem { enumeration, name } => {
            let owner = root
                .enumeration_mut(enumeration)
                .ok_or(SkipReason::TargetMissing)?;
            let i = owner.item_position(name).ok_or(SkipReason::TargetMissing)?;
            owner.items.remove(i);
        }
    }
    Ok(())
}
