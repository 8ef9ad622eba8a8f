//! Repository for the `recipes` table and its category links.

use std::collections::HashMap;

use recipebox_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::category::Category;
use crate::models::recipe::{CreateRecipe, Recipe, RecipeWithCategories, UpdateRecipe};
use crate::repositories::category_repo::CategoryRepo;

/// Column list for the `recipes` table.
const COLUMNS: &str = "id, title, ingredients, instructions, created_at, updated_at";

/// Column list for the `categories` table (used in JOIN queries).
const CATEGORY_COLUMNS: &str = "c.id, c.name, c.is_active, c.created_at, c.updated_at";

/// Provides CRUD operations for recipes and their category associations.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a recipe and link it to every name in `input.categories`.
    ///
    /// Missing categories are created on the fly; existing ones are reused,
    /// never duplicated. Everything commits together or not at all. Category
    /// names are used as given, so callers normalize and de-duplicate first.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRecipe,
    ) -> Result<RecipeWithCategories, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO recipes (id, title, ingredients, instructions) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&insert_query)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(&input.title)
            .bind(&input.ingredients)
            .bind(&input.instructions)
            .fetch_one(&mut *tx)
            .await?;

        Self::link_names_inner(&mut tx, recipe.id, &input.categories).await?;
        let categories = Self::categories_for(&mut *tx, recipe.id).await?;

        tx.commit().await?;
        Ok(RecipeWithCategories { recipe, categories })
    }

    /// Find a recipe by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a recipe by ID, enriched with its categories.
    pub async fn find_by_id_with_categories(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecipeWithCategories>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(recipe) => {
                let categories = Self::categories_for(pool, recipe.id).await?;
                Ok(Some(RecipeWithCategories { recipe, categories }))
            }
            None => Ok(None),
        }
    }

    /// List all recipes in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY created_at, id");
        sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
    }

    /// List all recipes with their categories.
    pub async fn list_with_categories(
        pool: &PgPool,
    ) -> Result<Vec<RecipeWithCategories>, sqlx::Error> {
        let recipes = Self::list(pool).await?;
        let mut result = Vec::with_capacity(recipes.len());

        for recipe in recipes {
            let categories = Self::categories_for(pool, recipe.id).await?;
            result.push(RecipeWithCategories { recipe, categories });
        }

        Ok(result)
    }

    /// Replace a recipe's title, ingredients, and instructions.
    ///
    /// If `input.categories` is `Some`, the association set is replaced in the
    /// same transaction; `None` leaves it untouched.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<RecipeWithCategories>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE recipes SET \
                title = $2, \
                ingredients = $3, \
                instructions = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let recipe = sqlx::query_as::<_, Recipe>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.ingredients)
            .bind(&input.instructions)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(recipe) = recipe else {
            return Ok(None);
        };

        if let Some(ref names) = input.categories {
            sqlx::query("DELETE FROM recipe_categories WHERE recipe_id = $1")
                .bind(recipe.id)
                .execute(&mut *tx)
                .await?;
            Self::link_names_inner(&mut tx, recipe.id, names).await?;
        }

        let categories = Self::categories_for(&mut *tx, recipe.id).await?;

        tx.commit().await?;
        Ok(Some(RecipeWithCategories { recipe, categories }))
    }

    /// Delete a recipe. Its category links cascade; the categories remain.
    ///
    /// Returns `true` if a recipe was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Category association helpers
    // -----------------------------------------------------------------------

    /// Get all categories linked to a recipe, in the order they were linked.
    ///
    /// Accepts a pool or an open transaction.
    pub async fn categories_for<'e, E>(
        executor: E,
        recipe_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} \
             FROM categories c \
             JOIN recipe_categories rc ON rc.category_id = c.id \
             WHERE rc.recipe_id = $1 \
             ORDER BY rc.id"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(recipe_id)
            .fetch_all(executor)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Create-or-get each named category and link it to the recipe.
    ///
    /// Categories are resolved in sorted name order so concurrent transactions
    /// lock new `categories` rows in the same sequence and cannot deadlock.
    /// Links are then inserted in the caller's order, which `categories_for`
    /// reports back.
    async fn link_names_inner(
        conn: &mut PgConnection,
        recipe_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut ids: HashMap<&str, DbId> = HashMap::with_capacity(sorted.len());
        for name in sorted {
            let category = CategoryRepo::create_or_get(&mut *conn, name).await?;
            ids.insert(name, category.id);
        }

        for name in names {
            if let Some(&category_id) = ids.get(name.as_str()) {
                CategoryRepo::link_inner(&mut *conn, recipe_id, category_id).await?;
            }
        }
        Ok(())
    }
}
