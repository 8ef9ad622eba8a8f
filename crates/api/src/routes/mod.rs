pub mod auth;
pub mod categories;
pub mod health;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /register                                        register (public)
/// /login                                           login (public)
/// /refresh                                         refresh (public)
///
/// /recipes                                         list, create
/// /recipes/{id}                                    get, update, delete
/// /recipes/{id}/categories                         categories of a recipe
/// /recipes/category                                link (POST), unlink (DELETE)
///
/// /categories                                      list, create, rename (PUT), delete (?name=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public authentication routes.
        .merge(auth::router())
        // Recipes and recipe-category links.
        .nest("/recipes", recipes::router())
        // Categories.
        .nest("/categories", categories::router())
}
