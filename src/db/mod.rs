// src/db/mod.rs
//
// Local database module
//
// Provides:
// - Connection pooling
// - Schema migrations

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_pool_at, get_connection, get_database_path, ConnectionPool,
    PooledConn,
};

pub use migrations::initialize_database;
