//! HTTP-level integration tests for `/categories` and recipe-category links.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use recipebox_db::repositories::CategoryRepo;
use sqlx::PgPool;

async fn create_category(pool: &PgPool, token: &str, name: &str) -> axum::response::Response {
    post_json_auth(
        common::build_test_app(pool.clone()),
        "/categories",
        serde_json::json!({ "name": name }),
        token,
    )
    .await
}

async fn create_recipe(pool: &PgPool, token: &str, categories: &[&str]) -> String {
    let body = serde_json::json!({
        "title": "Pancakes",
        "ingredients": "flour, milk",
        "instructions": "Whisk and fry.",
        "categories": categories,
    });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/recipes", body, token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Category CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_categories(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;

    let response = create_category(&pool, &token, "Soup").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Soup");
    assert_eq!(
        create_category(&pool, &token, "Bread").await.status(),
        StatusCode::CREATED
    );

    let response = get_auth(common::build_test_app(pool), "/categories", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listed: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec!["Bread", "Soup"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_duplicate_category(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;

    assert_eq!(
        create_category(&pool, &token, "Soup").await.status(),
        StatusCode::CREATED
    );
    let response = create_category(&pool, &token, "Soup").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "DUPLICATE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category_too_long(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;

    let response = create_category(&pool, &token, &"x".repeat(31)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

/// Renaming keeps every link pointing at the renamed category.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_category_keeps_links(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;
    let recipe_id = create_recipe(&pool, &token, &["Breakfast"]).await;

    let body = serde_json::json!({ "name": "Breakfast", "newName": "Brunch" });
    let response =
        put_json_auth(common::build_test_app(pool.clone()), "/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Brunch");

    assert_eq!(CategoryRepo::link_count(&pool, "Brunch").await.unwrap(), 1);
    assert_eq!(CategoryRepo::link_count(&pool, "Breakfast").await.unwrap(), 0);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/recipes/{recipe_id}/categories"),
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"][0]["name"], "Brunch");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_missing_or_taken(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;
    create_category(&pool, &token, "Soup").await;
    create_category(&pool, &token, "Stew").await;

    let body = serde_json::json!({ "name": "Ghost", "newName": "Spirit" });
    let response =
        put_json_auth(common::build_test_app(pool.clone()), "/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "name": "Soup", "newName": "Stew" });
    let response = put_json_auth(common::build_test_app(pool), "/categories", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "DUPLICATE");
}

/// Deleting a category drops its links but leaves recipes alone.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;
    let recipe_id = create_recipe(&pool, &token, &["Breakfast", "Sweet"]).await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        "/categories?name=Breakfast",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/recipes/{recipe_id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["categories"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["categories"][0]["name"], "Sweet");

    let again = delete_auth(common::build_test_app(pool), "/categories?name=Breakfast", &token)
        .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_category_without_name_param(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;

    let response = delete_auth(common::build_test_app(pool), "/categories", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Recipe-category links
// ---------------------------------------------------------------------------

/// Linking is idempotent and returns the same link row both times.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_category_to_recipe(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;
    let recipe_id = create_recipe(&pool, &token, &[]).await;
    create_category(&pool, &token, "Vegan").await;

    let body = serde_json::json!({ "recipeId": recipe_id, "category": "Vegan" });
    let first = post_json_auth(
        common::build_test_app(pool.clone()),
        "/recipes/category",
        body.clone(),
        &token,
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_json = body_json(first).await;
    assert_eq!(first_json["data"]["recipeId"], recipe_id.as_str());

    let second =
        post_json_auth(common::build_test_app(pool.clone()), "/recipes/category", body, &token)
            .await;
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(body_json(second).await["data"]["id"], first_json["data"]["id"]);

    assert_eq!(CategoryRepo::link_count(&pool, "Vegan").await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_category_missing_side(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;
    let recipe_id = create_recipe(&pool, &token, &[]).await;

    let body = serde_json::json!({ "recipeId": recipe_id, "category": "Nowhere" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/recipes/category", body, &token)
            .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    create_category(&pool, &token, "Vegan").await;
    let body = serde_json::json!({ "recipeId": uuid::Uuid::new_v4(), "category": "Vegan" });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/recipes/category", body, &token)
            .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(CategoryRepo::link_count(&pool, "Vegan").await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_category_from_recipe(pool: PgPool) {
    let token = common::register_and_login(&pool, "chef").await;
    let recipe_id = create_recipe(&pool, &token, &["Vegan"]).await;
    let uri = format!("/recipes/category?recipeId={recipe_id}&category=Vegan");

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(CategoryRepo::link_count(&pool, "Vegan").await.unwrap(), 0);
    assert!(CategoryRepo::find_by_name(&pool, "Vegan").await.unwrap().is_some());

    let again = delete_auth(common::build_test_app(pool), &uri, &token).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
