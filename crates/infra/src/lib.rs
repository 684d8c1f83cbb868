//! Infrastructure layer: configuration, Postgres wiring, repository adapters.

pub mod config;
pub mod db;
pub mod repository;

pub use config::{ConfigError, DbConfig, ServerConfig};
pub use db::{connect, ensure_schema, ConnectError, SchemaError};
pub use repository::{InMemoryProductRepository, PostgresProductRepository};
