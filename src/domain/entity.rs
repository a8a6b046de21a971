// src/domain/entity.rs
//
// The capability set shared by every record, and the closed sum type over
// the four categories.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Actor, Atom, Attributer, Category, Episode, Movie, Tvshow};
use crate::error::AppResult;

/// Placeholder shown for records without a display name.
pub const NAME_NOT_AVAILABLE: &str = "N/A";

/// Capabilities every loaded record provides, whatever its category.
pub trait EntityRecord: fmt::Display {
    fn ident(&self) -> Atom;

    /// Fixed per record type, never read from data.
    fn category(&self) -> Category;

    /// Title or full name, verbatim. Empty when the store has no name row.
    fn name(&self) -> &str;

    /// `None` for categories without an intrinsic year.
    fn year(&self) -> Option<i32>;

    /// Hand this record to the attribute subsystem.
    fn attrs(&self, conn: &Connection, attributer: &dyn Attributer) -> AppResult<()>;
}

/// Builds a record from a single result row, in the column order of the
/// record's loader query.
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// "Title (Year)", "N/A" when the name is empty, no year unless positive.
pub fn entity_string(name: &str, year: Option<i32>) -> String {
    let mut s = if name.is_empty() {
        NAME_NOT_AVAILABLE.to_string()
    } else {
        name.to_string()
    };
    if let Some(year) = year.filter(|y| *y > 0) {
        s.push_str(&format!(" ({})", year));
    }
    s
}

/// Any loaded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Entity {
    Movie(Movie),
    Tvshow(Tvshow),
    Episode(Episode),
    Actor(Actor),
}

impl Entity {
    fn record(&self) -> &dyn EntityRecord {
        match self {
            Entity::Movie(e) => e,
            Entity::Tvshow(e) => e,
            Entity::Episode(e) => e,
            Entity::Actor(e) => e,
        }
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            Entity::Movie(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_tvshow(&self) -> Option<&Tvshow> {
        match self {
            Entity::Tvshow(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_episode(&self) -> Option<&Episode> {
        match self {
            Entity::Episode(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_actor(&self) -> Option<&Actor> {
        match self {
            Entity::Actor(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_movie(self) -> Option<Movie> {
        match self {
            Entity::Movie(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_tvshow(self) -> Option<Tvshow> {
        match self {
            Entity::Tvshow(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_episode(self) -> Option<Episode> {
        match self {
            Entity::Episode(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_actor(self) -> Option<Actor> {
        match self {
            Entity::Actor(e) => Some(e),
            _ => None,
        }
    }
}

impl EntityRecord for Entity {
    fn ident(&self) -> Atom {
        self.record().ident()
    }

    fn category(&self) -> Category {
        self.record().category()
    }

    fn name(&self) -> &str {
        self.record().name()
    }

    fn year(&self) -> Option<i32> {
        self.record().year()
    }

    fn attrs(&self, conn: &Connection, attributer: &dyn Attributer) -> AppResult<()> {
        self.record().attrs(conn, attributer)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.record(), f)
    }
}

impl From<Movie> for Entity {
    fn from(e: Movie) -> Self {
        Entity::Movie(e)
    }
}

impl From<Tvshow> for Entity {
    fn from(e: Tvshow) -> Self {
        Entity::Tvshow(e)
    }
}

impl From<Episode> for Entity {
    fn from(e: Episode) -> Self {
        Entity::Episode(e)
    }
}

impl From<Actor> for Entity {
    fn from(e: Actor) -> Self {
        Entity::Actor(e)
    }
}
