//! recipebox API server library.
//!
//! Exposes the building blocks (config, state, credential service, error
//! handling, routes) so integration tests, the server binary, and the seed
//! binary all share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
