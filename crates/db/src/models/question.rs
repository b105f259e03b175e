//! Question entity model and DTOs.

use askhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::answer::Answer;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub user_id: DbId,
}

/// A question with its answers attached, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithAnswers {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<Answer>,
}

impl QuestionWithAnswers {
    /// Wrap a freshly created question, which has no answers yet.
    pub fn unanswered(question: Question) -> Self {
        Self {
            question,
            answers: Vec::new(),
        }
    }
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize)]
pub struct CreateQuestion {
    pub title: String,
    pub content: String,
    pub user_id: DbId,
}
