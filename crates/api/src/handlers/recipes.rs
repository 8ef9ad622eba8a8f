//! Handlers for the `/recipes` resource.
//!
//! All endpoints require authentication via [`AuthUser`]. Responses embed the
//! linked categories; category names in request bodies are trimmed and
//! de-duplicated before they reach the repository.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipebox_core::error::CoreError;
use recipebox_core::recipe::{prepare_category_names, validate_recipe_fields};
use recipebox_core::types::DbId;
use recipebox_db::models::recipe::{CreateRecipe, UpdateRecipe};
use recipebox_db::repositories::RecipeRepo;

use crate::error::{duplicate_on_conflict, AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /recipes
///
/// List every recipe with its categories, oldest first. An empty store is
/// reported as 404.
pub async fn list_recipes(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let recipes = RecipeRepo::list_with_categories(&state.pool).await?;
    if recipes.is_empty() {
        return Err(AppError::NotFound("No recipes found".into()));
    }

    Ok(Json(DataResponse { data: recipes }))
}

/// GET /recipes/{id}
pub async fn get_recipe(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeRepo::find_by_id_with_categories(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Recipe", id))?;

    Ok(Json(DataResponse { data: recipe }))
}

/// POST /recipes
///
/// Create a recipe and link it to the named categories, creating any that
/// do not exist yet.
pub async fn create_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRecipe>,
) -> AppResult<impl IntoResponse> {
    validate_recipe_fields(&input.title, &input.ingredients, &input.instructions)?;
    let input = CreateRecipe {
        categories: prepare_category_names(&input.categories)?,
        ..input
    };

    let key = input.id.map(|id| id.to_string()).unwrap_or_default();
    let created = RecipeRepo::create(&state.pool, &input)
        .await
        .map_err(duplicate_on_conflict("Recipe", key))?;

    tracing::info!(
        recipe_id = %created.recipe.id,
        categories = ?created.category_names(),
        user_id = %auth.user_id,
        username = %auth.username,
        "Recipe created",
    );

    Ok(Json(DataResponse { data: created }))
}

/// PUT /recipes/{id}
///
/// Replace a recipe's fields. Categories are replaced only when the body
/// carries a `categories` array.
pub async fn update_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateRecipe>,
) -> AppResult<impl IntoResponse> {
    validate_recipe_fields(&input.title, &input.ingredients, &input.instructions)?;
    let categories = match input.categories {
        Some(ref names) => Some(prepare_category_names(names)?),
        None => None,
    };
    let input = UpdateRecipe { categories, ..input };

    let updated = RecipeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Recipe", id))?;

    tracing::info!(recipe_id = %id, user_id = %auth.user_id, "Recipe updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /recipes/{id}
///
/// Delete a recipe and its category links. The categories themselves stay.
pub async fn delete_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !RecipeRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Recipe", id).into());
    }

    tracing::info!(recipe_id = %id, user_id = %auth.user_id, "Recipe deleted");

    Ok(StatusCode::OK)
}

/// GET /recipes/{id}/categories
pub async fn list_recipe_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if RecipeRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::not_found("Recipe", id).into());
    }

    let categories = RecipeRepo::categories_for(&state.pool, id).await?;

    Ok(Json(DataResponse { data: categories }))
}
