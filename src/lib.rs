// src/lib.rs
// MediaDB - atom resolution over a relational media-metadata store
//
// Architecture:
// - Domain: atoms, categories, the four record types, the Entity sum type
// - Repositories: one fixed query per category, directed and guess lookup
// - Services: lookups plus attribute enrichment for callers
// - Read-only: no writes and no caching; every lookup reads the store

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    entity_string, Actor, Atom, Attributer, Category, Entity, EntityRecord, Episode, FromRow,
    Movie, NoAttributes, Tvshow,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_test_connection, ConnectionPool, DatabaseConfig};

// ============================================================================
// PUBLIC API - Lookups
// ============================================================================

pub use repositories::{
    from_atom, from_atom_guess, load_actor, load_episode, load_movie, load_tvshow,
    EntityRepository, SqliteEntityRepository,
};

pub use services::EntityService;
