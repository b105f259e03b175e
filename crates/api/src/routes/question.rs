//! Route definitions for the `/v1/questions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{answer, question};
use crate::state::AppState;

/// Routes mounted at `/v1/questions`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// POST   /{id}/answers        -> answer::create
/// POST   /{id}/best_answer    -> answer::set_best
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route("/{id}/answers", post(answer::create))
        .route("/{id}/best_answer", post(answer::set_best))
}
