// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Read-only: no writes, no caching
// - Explicit SQL only
// - Every function takes the connection it reads through

pub mod entity_repository;
pub mod loaders;
pub mod resolver;

#[cfg(test)]
pub(crate) mod fixtures;


pub use entity_repository::{EntityRepository, SqliteEntityRepository};
pub use loaders::{load_actor, load_episode, load_movie, load_tvshow};
pub use resolver::{from_atom, from_atom_guess};
