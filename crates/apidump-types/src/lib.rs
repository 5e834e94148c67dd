//! Entity model for API dump snapshots.
//!
//! A [`Root`] holds the classes and enumerations exposed by a platform at one
//! point in time. Every entity exposes the same small capability set through
//! the [`Entity`] trait (name, kind, tags, and a bag of named [`Value`]
//! fields), which is all the diff, patch, and link engines rely on.
//!
//! # Key Types
//!
//! - [`Root`] -- A snapshot: classes and enumerations
//! - [`Class`] / [`Member`] -- Classes and their properties, functions, events, and callbacks
//! - [`Enum`] / [`EnumItem`] -- Enumerations and their items
//! - [`Value`] -- Tagged field value with deep equality and canonical rendering
//! - [`Tags`] -- Order-insensitive marker set
//! - [`Entity`] -- Name/kind/tag/field accessors shared by every entity

pub mod class;
pub mod entity;
pub mod enumeration;
pub mod error;
pub mod hierarchy;
pub mod member;
pub mod root;
pub mod tags;
pub mod value;

pub use class::Class;
pub use entity::{field, Entity, EntityKind, Fields};
pub use enumeration::{Enum, EnumItem};
pub use error::{FieldError, FieldResult};
pub use hierarchy::HierarchyNode;
pub use member::{Callback, Event, Function, Member, MemberKind, Property};
pub use root::Root;
pub use tags::Tags;
pub use value::{Parameter, Type, Value, ValueKind};
