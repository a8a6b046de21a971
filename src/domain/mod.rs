// src/domain/mod.rs
//
// Domain Root
//
// Atoms, categories and the four record types. Records are read-only
// snapshots of a single row; nothing here caches or writes.

pub mod actor;
pub mod atom;
pub mod attributes;
pub mod category;
pub mod entity;
pub mod episode;
pub mod movie;
pub mod tvshow;

pub use actor::Actor;
pub use atom::Atom;
pub use attributes::{Attributer, NoAttributes};
pub use category::Category;
pub use entity::{entity_string, Entity, EntityRecord, FromRow, NAME_NOT_AVAILABLE};
pub use episode::Episode;
pub use movie::Movie;
pub use tvshow::Tvshow;
