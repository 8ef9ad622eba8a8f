//! Repository for the `categories` and `recipe_categories` tables.
//!
//! Associations reference categories by surrogate id, so renaming a category
//! never touches link rows. Deleting a category cascades to its links.

use recipebox_core::types::DbId;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::category::{Category, RecipeCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, is_active, created_at, updated_at";

/// Column list for `recipe_categories` queries.
const LINK_COLUMNS: &str = "id, recipe_id, category_id, is_active, created_at";

/// Result of linking a category to a recipe by name.
#[derive(Debug)]
pub enum LinkOutcome {
    /// The link exists (newly created or already present).
    Linked(RecipeCategory),
    RecipeNotFound,
    CategoryNotFound,
}

/// Provides CRUD operations for categories and recipe-category links.
pub struct CategoryRepo;

impl CategoryRepo {
    // -----------------------------------------------------------------------
    // Category CRUD
    // -----------------------------------------------------------------------

    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new category.
    ///
    /// A taken name surfaces as a `uq_categories_name` unique violation.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(Uuid::new_v4())
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Rename a category in place.
    ///
    /// Returns `None` if no category is named `old_name`. A taken `new_name`
    /// surfaces as a unique violation.
    pub async fn rename(
        pool: &PgPool,
        old_name: &str,
        new_name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("UPDATE categories SET name = $2 WHERE name = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(old_name)
            .bind(new_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by name. Cascade deletes all of its recipe links.
    ///
    /// Returns `true` if a category was deleted.
    pub async fn delete(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the category named `name`, creating it first if it does not exist.
    ///
    /// Runs on the caller's connection so it can join an open transaction.
    /// The follow-up `SELECT` is a separate statement, so under READ COMMITTED
    /// it also sees a row committed concurrently by another request.
    pub async fn create_or_get(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        sqlx::query(
            "INSERT INTO categories (id, name) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .execute(&mut *conn)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(&mut *conn)
            .await
    }

    // -----------------------------------------------------------------------
    // Recipe links
    // -----------------------------------------------------------------------

    /// Link an existing category to an existing recipe. Idempotent.
    ///
    /// Neither side is created implicitly; a missing recipe or category is
    /// reported through [`LinkOutcome`].
    pub async fn add_to_recipe(
        pool: &PgPool,
        recipe_id: DbId,
        name: &str,
    ) -> Result<LinkOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // FOR SHARE keeps both rows from being deleted until the link commits.
        let recipe_exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM recipes WHERE id = $1 FOR SHARE")
                .bind(recipe_id)
                .fetch_optional(&mut *tx)
                .await?;
        if recipe_exists.is_none() {
            return Ok(LinkOutcome::RecipeNotFound);
        }

        let category_id: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM categories WHERE name = $1 FOR SHARE")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(category_id) = category_id else {
            return Ok(LinkOutcome::CategoryNotFound);
        };

        let link = Self::link_inner(&mut tx, recipe_id, category_id).await?;

        tx.commit().await?;
        Ok(LinkOutcome::Linked(link))
    }

    /// Remove the link between a recipe and the category named `name`.
    ///
    /// Returns `true` if a link was removed. The category itself is kept.
    pub async fn remove_from_recipe(
        pool: &PgPool,
        recipe_id: DbId,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM recipe_categories rc \
             USING categories c \
             WHERE rc.category_id = c.id AND rc.recipe_id = $1 AND c.name = $2",
        )
        .bind(recipe_id)
        .bind(name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count link rows pointing at the category named `name`.
    pub async fn link_count(pool: &PgPool, name: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM recipe_categories rc \
             JOIN categories c ON c.id = rc.category_id \
             WHERE c.name = $1",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Insert (or re-activate) a link row on the caller's connection.
    pub(crate) async fn link_inner(
        conn: &mut PgConnection,
        recipe_id: DbId,
        category_id: DbId,
    ) -> Result<RecipeCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipe_categories (recipe_id, category_id) \
             VALUES ($1, $2) \
             ON CONFLICT (recipe_id, category_id) DO UPDATE SET is_active = true \
             RETURNING {LINK_COLUMNS}"
        );
        sqlx::query_as::<_, RecipeCategory>(&query)
            .bind(recipe_id)
            .bind(category_id)
            .fetch_one(conn)
            .await
    }
}
