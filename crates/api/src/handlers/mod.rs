//! Request handlers.
//!
//! Each submodule holds the async handler functions for one resource.
//! Handlers validate input, delegate to the credential service or a
//! repository in `recipebox_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod categories;
pub mod recipes;
