//! Route definitions for the `/recipes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{categories, recipes};
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /                 -> list_recipes
/// POST   /                 -> create_recipe
/// POST   /category         -> add_category_to_recipe
/// DELETE /category         -> remove_category_from_recipe
/// GET    /{id}             -> get_recipe
/// PUT    /{id}             -> update_recipe
/// DELETE /{id}             -> delete_recipe
/// GET    /{id}/categories  -> list_recipe_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes).post(recipes::create_recipe))
        .route(
            "/category",
            post(categories::add_category_to_recipe)
                .delete(categories::remove_category_from_recipe),
        )
        .route(
            "/{id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route("/{id}/categories", get(recipes::list_recipe_categories))
}
