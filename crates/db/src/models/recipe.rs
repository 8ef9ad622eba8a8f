//! Recipe entity model and DTOs.

use recipebox_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// A row from the `recipes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A recipe together with the categories linked to it.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeWithCategories {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub categories: Vec<Category>,
}

impl RecipeWithCategories {
    /// Names of the linked categories, in the order they were loaded.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

/// DTO for creating a recipe.
///
/// `id` may be supplied by the client; a v4 UUID is generated otherwise.
/// Categories are referenced by name and created on first use.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    pub id: Option<DbId>,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// DTO for replacing a recipe's fields.
///
/// When `categories` is `Some`, the association set is replaced as well;
/// when `None`, existing associations are left untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}
