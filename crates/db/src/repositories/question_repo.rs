//! Repository for the `questions` table.

use std::collections::HashMap;

use askhub_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::question::{CreateQuestion, Question, QuestionWithAnswers};
use crate::repositories::AnswerRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, user_id";

/// Provides create and list operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    ///
    /// `user_id` is stored as given; the author is not looked up.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (title, content, user_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a question by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = ?1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all questions ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List all questions with their answers attached.
    ///
    /// Runs one query for questions and one for answers, then groups the
    /// answers by `question_id` in memory.
    pub async fn list_with_answers(
        pool: &SqlitePool,
    ) -> Result<Vec<QuestionWithAnswers>, sqlx::Error> {
        let questions = Self::list(pool).await?;
        let answers = AnswerRepo::list(pool).await?;

        let mut by_question: HashMap<DbId, Vec<_>> = HashMap::new();
        for answer in answers {
            by_question.entry(answer.question_id).or_default().push(answer);
        }

        Ok(questions
            .into_iter()
            .map(|question| {
                let answers = by_question.remove(&question.id).unwrap_or_default();
                QuestionWithAnswers { question, answers }
            })
            .collect())
    }
}
