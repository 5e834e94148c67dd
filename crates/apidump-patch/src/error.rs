//! Reasons an action is skipped during patching.

use apidump_types::{EntityKind, FieldError};
use thiserror::Error;

/// Why an action left the tree untouched.
///
/// Patching never fails; these are recorded in the
/// [`PatchReport`](crate::PatchReport) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The targeted entity does not exist.
    #[error("target not found")]
    TargetMissing,

    /// The class or enum that should own the new entity does not exist.
    #[error("owner {0:?} not found")]
    OwnerMissing(String),

    /// An entity with the target identity already exists.
    #[error("entity already exists")]
    AlreadyExists,

    /// An Add carried no entity to insert.
    #[error("no entity to insert")]
    MissingPayload,

    /// An Add carried an entity of a different kind than its target.
    #[error("payload is {payload}, target is {target}")]
    PayloadMismatch {
        target: EntityKind,
        payload: EntityKind,
    },

    /// An Add carried an entity whose name differs from its target.
    #[error("payload is named {payload:?}, target is {target:?}")]
    NameMismatch { target: String, payload: String },

    /// The entity rejected the field write.
    #[error(transparent)]
    Field(#[from] FieldError),
}
