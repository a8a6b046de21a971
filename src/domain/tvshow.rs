// src/domain/tvshow.rs

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{entity_string, EntityRecord, FromRow};
use super::{Atom, Attributer, Category};
use crate::error::AppResult;

/// A TV series. Its episodes point back at it by atom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tvshow {
    pub id: Atom,
    pub title: String,
    pub year: i32,
    pub sequence: String,
    /// First year of the run, if known.
    pub year_start: Option<i32>,
    /// Last year of the run. Absent for running or unknown shows.
    pub year_end: Option<i32>,
}

impl EntityRecord for Tvshow {
    fn ident(&self) -> Atom {
        self.id
    }

    fn category(&self) -> Category {
        Category::Tvshow
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

/// Columns: atom_id, name, year, sequence, year_start, year_end
impl FromRow for Tvshow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Tvshow {
            id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            year: row.get(2)?,
            sequence: row.get(3)?,
            year_start: row.get(4)?,
            year_end: row.get(5)?,
        })
    }
}

impl fmt::Display for Tvshow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&entity_string(&self.title, Some(self.year)))
    }
}
