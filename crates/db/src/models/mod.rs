//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request payloads that write that table

pub mod category;
pub mod recipe;
pub mod user;
