// src/repositories/fixtures.rs
//
// Shared test data
//
// Atoms:
//   1    movie   "Alien" (1979)
//   2    tvshow  "The X-Files" (1993-2002)
//   3    episode "Pilot", S01E01 of 2
//   4    actor   "Weaver, Sigourney"
//   5    tvshow  "Running Show", no end year
//   7    movie   no name row
//   8    episode of show 999, which does not exist
//   100  movie + tvshow + episode + actor
//   200  episode + actor
//   300  actor only

use rusqlite::Connection;
use std::sync::Mutex;

use crate::db::create_test_connection;
use crate::domain::{Atom, Attributer, Category, EntityRecord};
use crate::error::{AppError, AppResult};

/// Entity tables the loaders read. Atoms are only unique per table; no
/// foreign key ties episode.tvshow_atom_id to tvshow.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS name (
        atom_id  INTEGER PRIMARY KEY,
        name     TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS movie (
        atom_id   INTEGER PRIMARY KEY,
        year      INTEGER NOT NULL DEFAULT 0,
        sequence  TEXT NOT NULL DEFAULT '',
        tv        INTEGER NOT NULL DEFAULT 0,
        video     INTEGER NOT NULL DEFAULT 0
    );

    CREATE TABLE IF NOT EXISTS tvshow (
        atom_id     INTEGER PRIMARY KEY,
        year        INTEGER NOT NULL DEFAULT 0,
        sequence    TEXT NOT NULL DEFAULT '',
        year_start  INTEGER,
        year_end    INTEGER
    );

    CREATE TABLE IF NOT EXISTS episode (
        atom_id         INTEGER PRIMARY KEY,
        tvshow_atom_id  INTEGER NOT NULL,
        year            INTEGER NOT NULL DEFAULT 0,
        season          INTEGER NOT NULL DEFAULT 0,
        episode_num     INTEGER NOT NULL DEFAULT 0
    );

    CREATE INDEX IF NOT EXISTS idx_episode_tvshow ON episode(tvshow_atom_id);

    CREATE TABLE IF NOT EXISTS actor (
        atom_id   INTEGER PRIMARY KEY,
        sequence  TEXT NOT NULL DEFAULT ''
    );
";

pub const SEED: &str = "
    INSERT INTO name (atom_id, name) VALUES
        (1, 'Alien'),
        (2, 'The X-Files'),
        (3, 'Pilot'),
        (4, 'Weaver, Sigourney'),
        (5, 'Running Show'),
        (8, 'Orphan'),
        (100, 'Shared'),
        (200, 'Also Shared'),
        (300, 'Hurt, John');

    INSERT INTO movie (atom_id, year, sequence, tv, video) VALUES
        (1, 1979, '', 0, 0),
        (7, 1985, 'II', 0, 1),
        (100, 2000, '', 1, 0);

    INSERT INTO tvshow (atom_id, year, sequence, year_start, year_end) VALUES
        (2, 1993, '', 1993, 2002),
        (5, 2015, '', 2015, NULL),
        (100, 2001, '', 2001, 2003);

    INSERT INTO episode (atom_id, tvshow_atom_id, year, season, episode_num) VALUES
        (3, 2, 1993, 1, 1),
        (8, 999, 2010, 1, 2),
        (100, 2, 1994, 2, 3),
        (200, 2, 1995, 3, 4);

    INSERT INTO actor (atom_id, sequence) VALUES
        (4, ''),
        (100, 'I'),
        (200, 'II'),
        (300, '');
";

pub fn seed(conn: &Connection) {
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute_batch(SEED).unwrap();
}

pub fn seeded_connection() -> Connection {
    let conn = create_test_connection().unwrap();
    seed(&conn);
    conn
}

/// Attributer that remembers what it was asked about.
#[derive(Default)]
pub struct RecordingAttributer {
    pub seen: Mutex<Vec<(Category, Atom)>>,
    pub fail_with: Option<String>,
}

impl RecordingAttributer {
    pub fn failing(message: &str) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn seen(&self) -> Vec<(Category, Atom)> {
        self.seen.lock().unwrap().clone()
    }
}

impl Attributer for RecordingAttributer {
    fn for_entity(&self, _conn: &Connection, entity: &dyn EntityRecord) -> AppResult<()> {
        self.seen
            .lock()
            .unwrap()
            .push((entity.category(), entity.ident()));
        match &self.fail_with {
            Some(message) => Err(AppError::Other(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_connection_has_entity_tables() {
        let conn = seeded_connection();

        for table in ["name", "movie", "tvshow", "episode", "actor"] {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
                .unwrap();
            assert!(count > 0, "table {} was not seeded", table);
        }
    }

    #[test]
    fn test_schema_does_not_track_versions() {
        let conn = seeded_connection();
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(!exists);
    }
}
