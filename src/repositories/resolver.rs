// src/repositories/resolver.rs
//
// Atom -> Entity resolution
//
// from_atom() trusts the caller's category and reports that loader's
// error verbatim. from_atom_guess() walks Category::ALL and returns the
// first hit, so an atom present in several tables resolves to the
// highest-priority one.

use rusqlite::Connection;

use super::loaders::{load_actor, load_episode, load_movie, load_tvshow};
use crate::domain::{Atom, Category, Entity};
use crate::error::{AppError, AppResult};

/// Load the entity of `category` identified by `id`.
pub fn from_atom(conn: &Connection, category: Category, id: Atom) -> AppResult<Entity> {
    Ok(match category {
        Category::Movie => load_movie(conn, id)?.into(),
        Category::Tvshow => load_tvshow(conn, id)?.into(),
        Category::Episode => load_episode(conn, id)?.into(),
        Category::Actor => load_actor(conn, id)?.into(),
    })
}

/// Like `from_atom`, but without a category hint: tries movie, tvshow,
/// episode and actor in that order.
///
/// Individual failures are dropped; if nothing matches, the only error
/// returned is `AppError::EntityNotFound(id)`.
pub fn from_atom_guess(conn: &Connection, id: Atom) -> AppResult<Entity> {
    for category in Category::ALL {
        match from_atom(conn, category, id) {
            Ok(entity) => {
                log::debug!("guessed {} for atom {}", category, id);
                return Ok(entity);
            }
            Err(e) => log::trace!("atom {} is not a {}: {}", id, category, e),
        }
    }

    log::debug!("atom {} matched no category", id);
    Err(AppError::EntityNotFound(id))
}
