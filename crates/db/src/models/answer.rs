//! Answer entity model and DTOs.

use askhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub content: String,
    pub user_id: DbId,
    pub question_id: DbId,
    pub is_best: bool,
}

/// DTO for creating a new answer.
///
/// `question_id` may be omitted, in which case the question from the
/// request path is used.
#[derive(Debug, Deserialize)]
pub struct CreateAnswer {
    pub content: String,
    pub user_id: DbId,
    pub question_id: Option<DbId>,
}

/// Body of the best-answer request. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct SetBestAnswer {
    /// The answer to mark as best.
    pub id: DbId,
}
