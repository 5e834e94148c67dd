//! Diff engine for API dump snapshots.
//!
//! Compares two [`apidump_types::Root`] snapshots (or any pair of classes,
//! members, enums, or enum items) and produces an ordered list of
//! [`Action`]s that transforms the first into the second.
//!
//! # Key Types
//!
//! - [`Differ`] / [`DiffConfig`] -- Snapshot and entity-level diffing
//! - [`Action`] / [`Target`] / [`Payload`] -- Add, Remove, and per-field Change records
//! - [`ActionSummary`] -- Operation counts for an action list

pub mod action;
pub mod config;
pub mod differ;

pub use action::{Action, ActionSummary, Op, Payload, Target};
pub use config::DiffConfig;
pub use differ::{diff, Differ};
