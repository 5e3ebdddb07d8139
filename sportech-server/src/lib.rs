//! sportech-server: read-only football catalog over HTTP
//!
//! Serves leagues, teams, stadiums, players and managers. Players and
//! managers are composed per request from a slot record and the person it
//! references, see [`services::CompositionService`].

pub mod db;
pub mod http;
pub mod models;
pub mod services;
pub mod state;

pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::{Accessors, AppState};
