// src/repositories/loaders.rs
//
// Per-category loaders
//
// One fixed query per category: the category's table LEFT JOINed with the
// shared name table, so a missing name row yields an empty name instead
// of hiding the record. Only a missing primary row is "not found".

use rusqlite::Connection;

use crate::domain::{Actor, Atom, Category, Episode, FromRow, Movie, Tvshow};
use crate::error::{AppError, AppResult};

const MOVIE_QUERY: &str = "
    SELECT m.atom_id, n.name, m.year, m.sequence, m.tv, m.video
    FROM movie AS m
    LEFT JOIN name AS n ON n.atom_id = m.atom_id
    WHERE m.atom_id = ?1";

const TVSHOW_QUERY: &str = "
    SELECT t.atom_id, n.name, t.year, t.sequence, t.year_start, t.year_end
    FROM tvshow AS t
    LEFT JOIN name AS n ON n.atom_id = t.atom_id
    WHERE t.atom_id = ?1";

const EPISODE_QUERY: &str = "
    SELECT e.atom_id, e.tvshow_atom_id, n.name,
           e.year, e.season, e.episode_num
    FROM episode AS e
    LEFT JOIN name AS n ON n.atom_id = e.atom_id
    WHERE e.atom_id = ?1";

const ACTOR_QUERY: &str = "
    SELECT a.atom_id, n.name, a.sequence
    FROM actor AS a
    LEFT JOIN name AS n ON n.atom_id = a.atom_id
    WHERE a.atom_id = ?1";

fn load_one<R: FromRow>(
    conn: &Connection,
    category: Category,
    query: &str,
    id: Atom,
) -> AppResult<R> {
    log::debug!("loading {} {}", category, id);

    conn.query_row(query, [id], R::from_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::NotFound { category, id },
        other => AppError::Database(other),
    })
}

pub fn load_movie(conn: &Connection, id: Atom) -> AppResult<Movie> {
    load_one(conn, Category::Movie, MOVIE_QUERY, id)
}

pub fn load_tvshow(conn: &Connection, id: Atom) -> AppResult<Tvshow> {
    load_one(conn, Category::Tvshow, TVSHOW_QUERY, id)
}

pub fn load_episode(conn: &Connection, id: Atom) -> AppResult<Episode> {
    load_one(conn, Category::Episode, EPISODE_QUERY, id)
}

pub fn load_actor(conn: &Connection, id: Atom) -> AppResult<Actor> {
    load_one(conn, Category::Actor, ACTOR_QUERY, id)
}

impl Episode {
    /// Load the show this episode belongs to.
    ///
    /// Same result as a directed tvshow lookup on `tvshow_id`.
    pub fn tvshow(&self, conn: &Connection) -> AppResult<Tvshow> {
        load_tvshow(conn, self.tvshow_id)
    }
}
