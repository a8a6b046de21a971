// src/repositories/entity_repository.rs
//
// Pooled entity lookups
//
// Each call takes one connection from the pool and gives it back before
// returning. Nothing is cached: every lookup reads the store again.

use std::sync::Arc;

use super::resolver::{from_atom, from_atom_guess};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::{Atom, Attributer, Category, Entity, EntityRecord, Episode, Tvshow};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait EntityRepository: Send + Sync {
    /// Directed lookup.
    fn get(&self, category: Category, id: Atom) -> AppResult<Entity>;

    /// Guess lookup over every category.
    fn guess(&self, id: Atom) -> AppResult<Entity>;

    fn tvshow_for_episode(&self, episode: &Episode) -> AppResult<Tvshow>;

    /// Run the attribute subsystem over an already loaded entity.
    fn enrich(&self, entity: &Entity) -> AppResult<()>;
}

pub struct SqliteEntityRepository {
    pool: Arc<ConnectionPool>,
    attributer: Arc<dyn Attributer>,
}

impl SqliteEntityRepository {
    pub fn new(pool: Arc<ConnectionPool>, attributer: Arc<dyn Attributer>) -> Self {
        Self { pool, attributer }
    }
}

impl EntityRepository for SqliteEntityRepository {
    fn get(&self, category: Category, id: Atom) -> AppResult<Entity> {
        let conn = get_connection(&self.pool)?;
        from_atom(&conn, category, id)
    }

    fn guess(&self, id: Atom) -> AppResult<Entity> {
        let conn = get_connection(&self.pool)?;
        from_atom_guess(&conn, id)
    }

    fn tvshow_for_episode(&self, episode: &Episode) -> AppResult<Tvshow> {
        let conn = get_connection(&self.pool)?;
        episode.tvshow(&conn)
    }

    fn enrich(&self, entity: &Entity) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        entity.attrs(&conn, self.attributer.as_ref())
    }
}
