// src/domain/actor.rs

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{entity_string, EntityRecord, FromRow};
use super::{Atom, Attributer, Category};
use crate::error::AppResult;

/// A cast member. Actors have no year of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Atom,
    pub full_name: String,
    pub sequence: String,
}

impl EntityRecord for Actor {
    fn ident(&self) -> Atom {
        self.id
    }

    fn category(&self) -> Category {
        Category::Actor
    }

    fn name(&self) -> &str {
        &self.full_name
    }

    fn year(&self) -> Option<i32> {
        None
    }

    fn attrs(&self, conn: &Connection, attributer: &dyn Attributer) -> AppResult<()> {
        attributer.for_entity(conn, self)
    }
}

/// Columns: atom_id, name, sequence
impl FromRow for Actor {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Actor {
            id: row.get(0)?,
            full_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            sequence: row.get(2)?,
        })
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&entity_string(&self.full_name, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_has_no_year() {
        let actor = Actor {
            id: Atom(1),
            full_name: "Hurt, John".to_string(),
            sequence: "I".to_string(),
        };
        assert_eq!(actor.year(), None);
        assert_eq!(actor.category(), Category::Actor);
        assert_eq!(actor.to_string(), "Hurt, John");
    }
}
