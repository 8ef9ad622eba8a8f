//! Recipe and category field rules.
//!
//! Category names are stored in a `VARCHAR(30)` column with a unique index,
//! so the limit here must match the `categories` migration.

use crate::error::CoreError;

/// Maximum length of a category name in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 30;

/// Maximum length of a recipe title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Trim surrounding whitespace from a category name.
///
/// Names are otherwise stored as typed; "Dessert" and "dessert" are distinct.
pub fn normalize_category_name(name: &str) -> String {
    name.trim().to_string()
}

/// Validate a (normalized) category name: non-empty and within the column limit.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation(
            "Category name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Category name '{name}' exceeds maximum length of {MAX_CATEGORY_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Normalize, validate, and de-duplicate a list of category names.
///
/// First occurrence wins, so the caller's ordering is preserved.
pub fn prepare_category_names(names: &[String]) -> Result<Vec<String>, CoreError> {
    let mut prepared: Vec<String> = Vec::with_capacity(names.len());
    for raw in names {
        let name = normalize_category_name(raw);
        validate_category_name(&name)?;
        if !prepared.contains(&name) {
            prepared.push(name);
        }
    }
    Ok(prepared)
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

/// Validate the required text fields of a recipe.
pub fn validate_recipe_fields(
    title: &str,
    ingredients: &str,
    instructions: &str,
) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Recipe title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Recipe title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    if ingredients.trim().is_empty() {
        return Err(CoreError::Validation(
            "Recipe ingredients are required".to_string(),
        ));
    }
    if instructions.trim().is_empty() {
        return Err(CoreError::Validation(
            "Recipe instructions are required".to_string(),
        ));
    }
    Ok(())
}
