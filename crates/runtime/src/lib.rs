//! Runtime support for generated component registries.
//!
//! # Purpose
//!
//! A generated registry module declares a closed set of component types (one enum variant
//! per `#[Component]` declaration) and wraps a [`Registry`] over that set. This crate holds
//! the storage and the two capability traits the generated code implements.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Registry`] | Name-keyed, insertion-ordered store. Last registration for a name wins. |
//! | [`ComponentSet`] | Implemented by the generated enum; names the stored type. |
//! | [`Member`] | Implemented by each component type; projects it out of the enum. |
//! | [`Listing`] | One row of [`Registry::list_all`]. |
//!
//! # Retrieval
//!
//! `get::<T>` is a variant match through [`Member::project`], not a type-identity test.
//! A missing name and a name holding a different component type both yield `None`.
//!
//! # Lifecycle
//!
//! A registry is an ordinary owned value: created by its owner, mutated through
//! [`Registry::register`], dropped with its owner. It is not synchronized; callers sharing
//! one across threads serialize access themselves.

mod registry;

pub use registry::{ComponentSet, Listing, Member, Registry};
