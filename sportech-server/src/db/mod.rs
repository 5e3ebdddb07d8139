//! Database layer - connection pool, migrations and read accessors
//!
//! # Design Principles
//!
//! - One accessor per entity behind the `ReadRepo` trait
//! - No cross-entity SQL joins: references are resolved by the services
//! - Every storage fault carries the attempted operation and identifier

pub mod error;
pub mod fixtures;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use fixtures::{FixtureError, FixtureRepo};
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
