// src/db/mod.rs
//
// Database module
//
// Provides connection configuration and pooling. The schema belongs to the
// store; this crate only reads the columns its loaders select.

pub mod connection;

pub use connection::{
    create_connection_pool, create_test_connection, get_connection, ConnectionPool,
    DatabaseConfig, PooledConn,
};
