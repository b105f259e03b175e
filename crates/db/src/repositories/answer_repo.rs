//! Repository for the `answers` table.

use askhub_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::answer::{Answer, CreateAnswer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, user_id, question_id, is_best";

/// Provides create, list and best-answer operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    // ── Standard CRUD ────────────────────────────────────────────────

    /// Insert a new answer under `question_id`, returning the created row.
    ///
    /// `is_best` starts as `false`. Fails with a foreign-key violation if
    /// the question does not exist.
    pub async fn create(
        pool: &SqlitePool,
        question_id: DbId,
        input: &CreateAnswer,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (content, user_id, question_id)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(&input.content)
            .bind(input.user_id)
            .bind(question_id)
            .fetch_one(pool)
            .await
    }

    /// Find an answer by internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = ?1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every answer ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers ORDER BY id");
        sqlx::query_as::<_, Answer>(&query).fetch_all(pool).await
    }

    /// List the answers of one question ordered by ID.
    pub async fn list_by_question(
        pool: &SqlitePool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE question_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    // ── Best answer ──────────────────────────────────────────────────

    /// Mark `answer_id` as the best answer of `question_id` and clear the flag
    /// on every other answer of that question, in one transaction.
    ///
    /// The write is the first statement of the transaction and is guarded by
    /// the answer belonging to the question, so no flag changes when it does
    /// not. Returns `None` (after rolling back) in that case.
    pub async fn set_best(
        pool: &SqlitePool,
        question_id: DbId,
        answer_id: DbId,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE answers SET is_best = (id = ?1) \
             WHERE question_id = ?2 \
               AND EXISTS (SELECT 1 FROM answers WHERE id = ?1 AND question_id = ?2)",
        )
        .bind(answer_id)
        .bind(question_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = ?1");
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(answer_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(answer))
    }

    /// Find the current best answer for a question (if any).
    pub async fn find_best_for_question(
        pool: &SqlitePool,
        question_id: DbId,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers WHERE question_id = ?1 AND is_best = TRUE"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_optional(pool)
            .await
    }
}
