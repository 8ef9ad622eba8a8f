//! Handlers for the `/categories` resource and recipe-category links.
//!
//! Categories are addressed by name. All endpoints require authentication
//! via [`AuthUser`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipebox_core::error::CoreError;
use recipebox_core::recipe::{normalize_category_name, validate_category_name};
use recipebox_db::models::category::{
    CategoryNameParams, CreateCategory, RecipeCategoryLink, RenameCategory,
};
use recipebox_db::repositories::{CategoryRepo, LinkOutcome};

use crate::error::{duplicate_on_conflict, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Category CRUD
// ---------------------------------------------------------------------------

/// GET /categories
pub async fn list_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: categories }))
}

/// POST /categories
///
/// Create a category. A taken name is reported as a duplicate.
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_category_name(&input.name);
    validate_category_name(&name)?;

    let category = CategoryRepo::create(&state.pool, &name)
        .await
        .map_err(duplicate_on_conflict("Category", &name))?;

    tracing::info!(
        category_id = %category.id,
        name = %category.name,
        user_id = %auth.user_id,
        username = %auth.username,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /categories
///
/// Rename a category. Existing recipe links follow the rename.
pub async fn rename_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RenameCategory>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_category_name(&input.name);
    let new_name = normalize_category_name(&input.new_name);
    validate_category_name(&new_name)?;

    let category = CategoryRepo::rename(&state.pool, &name, &new_name)
        .await
        .map_err(duplicate_on_conflict("Category", &new_name))?
        .ok_or_else(|| CoreError::not_found("Category", &name))?;

    tracing::info!(
        category_id = %category.id,
        from = %name,
        to = %new_name,
        user_id = %auth.user_id,
        username = %auth.username,
        "Category renamed",
    );

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /categories?name=
///
/// Delete a category and its recipe links. Recipes are untouched.
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CategoryNameParams>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_category_name(&params.name);
    let links_removed = CategoryRepo::link_count(&state.pool, &name).await?;
    if !CategoryRepo::delete(&state.pool, &name).await? {
        return Err(CoreError::not_found("Category", &name).into());
    }

    tracing::info!(
        name = %name,
        links_removed,
        user_id = %auth.user_id,
        "Category deleted",
    );

    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Recipe-category links
// ---------------------------------------------------------------------------

/// POST /recipes/category
///
/// Link an existing category to an existing recipe. Linking twice is a no-op
/// that returns the existing link.
pub async fn add_category_to_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<RecipeCategoryLink>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_category_name(&input.category);

    let link = match CategoryRepo::add_to_recipe(&state.pool, input.recipe_id, &name).await? {
        LinkOutcome::Linked(link) => link,
        LinkOutcome::RecipeNotFound => {
            return Err(CoreError::not_found("Recipe", input.recipe_id).into())
        }
        LinkOutcome::CategoryNotFound => {
            return Err(CoreError::not_found("Category", &name).into())
        }
    };

    tracing::info!(
        recipe_id = %input.recipe_id,
        category = %name,
        user_id = %auth.user_id,
        username = %auth.username,
        "Category linked to recipe",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// DELETE /recipes/category?recipeId=&category=
pub async fn remove_category_from_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecipeCategoryLink>,
) -> AppResult<impl IntoResponse> {
    let name = normalize_category_name(&params.category);
    if !CategoryRepo::remove_from_recipe(&state.pool, params.recipe_id, &name).await? {
        return Err(CoreError::not_found(
            "Recipe category link",
            format!("{}/{name}", params.recipe_id),
        )
        .into());
    }

    tracing::info!(
        recipe_id = %params.recipe_id,
        category = %name,
        user_id = %auth.user_id,
        username = %auth.username,
        "Category unlinked from recipe",
    );

    Ok(StatusCode::OK)
}
