//! Patch engine for API dump snapshots.
//!
//! Applies [`apidump_diff::Action`] lists to a [`apidump_types::Root`] and
//! computes the list that undoes them.
//!
//! # Key Types
//!
//! - [`patch`] / [`patch_or_new`] / [`PatchReport`] -- Ordered, lenient application
//! - [`inverse`] -- Reverse action list computed against the pre-patch root
//! - [`SkipReason`] -- Why an action was a no-op

pub mod error;
pub mod inverse;
pub mod locate;
pub mod patcher;

#[cfg(test)]
mod properties;

pub use error::SkipReason;
pub use inverse::inverse;
pub use patcher::{patch, patch_or_new, PatchReport, SkippedAction};
