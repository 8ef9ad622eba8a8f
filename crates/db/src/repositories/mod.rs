//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that write more than
//! one table run inside a single transaction.

pub mod category_repo;
pub mod recipe_repo;
pub mod user_repo;

pub use category_repo::{CategoryRepo, LinkOutcome};
pub use recipe_repo::RecipeRepo;
pub use user_repo::UserRepo;
