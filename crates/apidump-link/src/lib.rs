//! Entity correspondence between two API dump snapshots.
//!
//! Two snapshots obtained independently (for instance, from different dump
//! formats) share no identifiers beyond names, and names may repeat. The
//! linker pairs entities by name and by ordinal: the n-th entity with a given
//! name on one side corresponds to the n-th entity with that name on the
//! other.
//!
//! # Key Types
//!
//! - [`link`] -- Compute the correspondence between two roots
//! - [`Links`] -- Bidirectional map between [`EntityRef`]s
//! - [`EntityRef`] -- Positional address of an entity within a root

pub mod linker;
pub mod links;

pub use linker::{link, match_ordinals};
pub use links::{EntityRef, Links};
