//! Compute the actions that undo a patch.
//!
//! The inverse must be computed against the root as it was *before* the
//! forward actions were applied; take a copy first if the same root is about
//! to be patched. The inverse list is in reverse order, so that dependent
//! actions (a member added to a freshly added class) are undone before the
//! actions they depend on.
//!
//! - Add becomes a bare Remove; identity alone is enough to delete.
//! - Remove becomes an Add carrying the entity as it currently exists in the
//!   pre-patch root. If the entity is not there, the Add has no payload and
//!   patching it is a no-op.
//! - Change swaps direction: its new value is the field's current value in
//!   the pre-patch root, falling back to the recorded previous value when
//!   the entity cannot be found.

use apidump_diff::{Action, Target};
use apidump_types::{field, Root, Value};
use tracing::debug;

use crate::locate;

/// Compute the inverse of `actions` relative to `pre_patch`.
pub fn inverse(actions: &[Action], pre_patch: &Root) -> Vec<Action> {
    let undo: Vec<Action> = actions
        .iter()
        .rev()
        .map(|action| invert(action, pre_patch))
        .collect();

    let unrecoverable = undo
        .iter()
        .filter(|a| matches!(a, Action::Add { payload: None, .. }))
        .count();
    debug!(actions = undo.len(), unrecoverable, "inverse computed");
    undo
}

fn invert(action: &Action, pre_patch: &Root) -> Action {
    match action {
        Action::Add { target, .. } => Action::Remove {
            target: target.clone(),
            payload: None,
        },
        Action::Remove { target, .. } => Action::Add {
            target: target.clone(),
            payload: locate::payload(pre_patch, target),
        },
        Action::Change {
            target,
            field,
            prev,
            next,
        } => {
            let current = locate::entity(pre_patch, target)
                .and_then(|entity| entity.field(field))
                .unwrap_or_else(|| prev.clone());
            Action::Change {
                target: post_patch_target(target, field, next),
                field: field.clone(),
                prev: next.clone(),
                next: current,
            }
        }
    }
}

/// Identity of a changed entity once the change has been applied.
fn post_patch_target(target: &Target, changed: &str, next: &Value) -> Target {
    match (changed, next) {
        (field::NAME, Value::String(name)) => target.renamed(name.as_str()),
        _ => target.clone(),
    }
}
