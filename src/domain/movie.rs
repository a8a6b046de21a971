// src/domain/movie.rs

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{entity_string, EntityRecord, FromRow};
use super::{Atom, Attributer, Category};
use crate::error::AppResult;

/// A theatrical, made-for-TV or direct-to-video movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Atom,
    pub title: String,
    pub year: i32,
    /// Disambiguates movies sharing a title and year (e.g. "I", "II").
    pub sequence: String,
    pub tv: bool,
    pub video: bool,
}

impl EntityRecord for Movie {
    fn ident(&self) -> Atom {
        self.id
    }

    fn category(&self) -> Category {
        Category::Movie
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

/// Columns: atom_id, name, year, sequence, tv, video
impl FromRow for Movie {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Movie {
            id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            year: row.get(2)?,
            sequence: row.get(3)?,
            tv: row.get(4)?,
            video: row.get(5)?,
        })
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&entity_string(&self.title, Some(self.year)))
    }
}
