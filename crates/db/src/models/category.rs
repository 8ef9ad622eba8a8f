//! Category and recipe-category link models and DTOs.

use recipebox_core::types::{DbId, LinkId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `recipe_categories` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCategory {
    pub id: LinkId,
    pub recipe_id: DbId,
    pub category_id: DbId,
    pub is_active: bool,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body for `POST /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// Body for `PUT /categories`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameCategory {
    pub name: String,
    pub new_name: String,
}

/// Query parameters for `DELETE /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryNameParams {
    pub name: String,
}

/// Body for `POST /recipes/category` and query for `DELETE /recipes/category`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCategoryLink {
    pub recipe_id: DbId,
    pub category: String,
}
