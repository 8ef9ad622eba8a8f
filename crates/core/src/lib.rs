//! Domain types, error taxonomy, and validation rules shared by the
//! `recipebox` crates. Nothing in here performs I/O.

pub mod error;
pub mod recipe;
pub mod types;
pub mod users;
