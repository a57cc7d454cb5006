//! Seed route
//!
//! `GET /seed_db` drops every table, recreates the schema and loads the
//! sample roster. Existing data is lost.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/seed_db", get(handler::seed_db))
}
