//! Request extractors whose rejections are [`AppError`]s.
//!
//! Axum's stock `Json`, `Query`, and `Path` reply with plain-text bodies and
//! their own status codes. These wrappers route the same failures through
//! [`AppError`] so clients always receive `{ "error", "code" }`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. A body that parses but does not match the target type
/// (e.g. a missing required field) is a `VALIDATION_ERROR`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters (e.g. a recipe UUID).
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
