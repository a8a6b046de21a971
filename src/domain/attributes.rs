// src/domain/attributes.rs
//
// Contract for the attribute subsystem
//
// Attributes (running times, genres, ratings, ...) are secondary facts
// stored outside the entity tables, keyed by (category, atom). This crate
// does not load them itself; it hands records to an Attributer.

use rusqlite::Connection;

use super::EntityRecord;
use crate::error::AppResult;

pub trait Attributer: Send + Sync {
    /// Load or update the attributes of `entity`, keyed by its category
    /// and atom. Errors are returned to the caller as-is.
    fn for_entity(&self, conn: &Connection, entity: &dyn EntityRecord) -> AppResult<()>;
}

/// Attributer for stores without an attribute subsystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttributes;

impl Attributer for NoAttributes {
    fn for_entity(&self, _conn: &Connection, entity: &dyn EntityRecord) -> AppResult<()> {
        log::trace!("no attributes for {} {}", entity.category(), entity.ident());
        Ok(())
    }
}
