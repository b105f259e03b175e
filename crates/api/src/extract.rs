//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with rejections routed through [`AppError`], so a malformed
/// body produces the standard `{ "error", "code" }` 400 response.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<CreateQuestion>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with rejections routed through [`AppError`]; an
/// unparseable segment such as `/v1/questions/abc/...` is a JSON 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
