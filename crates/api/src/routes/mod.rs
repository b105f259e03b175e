pub mod auth;
pub mod health;
pub mod question;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (health is mounted separately).
///
/// Route hierarchy:
///
/// ```text
/// /register                              register (POST)
/// /login                                 login (POST)
///
/// /v1/questions                          list, create (GET, POST)
/// /v1/questions/{id}/answers             create answer (POST)
/// /v1/questions/{id}/best_answer         set best answer (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and login at the root.
        .merge(auth::router())
        // Questions and their answers.
        .nest("/v1/questions", question::router())
}
