// src/domain/episode.rs

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{entity_string, EntityRecord, FromRow};
use super::{Atom, Attributer, Category};
use crate::error::AppResult;

/// A single episode of a TV show.
///
/// `tvshow_id` is a plain reference. Loading an episode never loads its
/// show; use `Episode::tvshow` for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: Atom,
    pub tvshow_id: Atom,
    pub title: String,
    pub year: i32,
    pub season: i32,
    pub episode_num: i32,
}

impl EntityRecord for Episode {
    fn ident(&self) -> Atom {
        self.id
    }

    fn category(&self) -> Category {
        Category::Episode
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn attrs(&self, conn: &Connection, attributer: &dyn Attributer) -> AppResult<()> {
        attributer.for_entity(conn, self)
    }
}

/// Columns: atom_id, tvshow_atom_id, name, year, season, episode_num
impl FromRow for Episode {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Episode {
            id: row.get(0)?,
            tvshow_id: row.get(1)?,
            title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            year: row.get(3)?,
            season: row.get(4)?,
            episode_num: row.get(5)?,
        })
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&entity_string(&self.title, Some(self.year)))
    }
}
