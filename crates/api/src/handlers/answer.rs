//! Handlers for answers, nested under `/v1/questions/{id}`.

use askhub_core::error::CoreError;
use askhub_core::qa::{
    resolve_answer_question_id, validate_answer_content, BEST_ANSWER_SET_MESSAGE,
};
use askhub_core::types::DbId;
use askhub_db::models::answer::{Answer, CreateAnswer, SetBestAnswer};
use askhub_db::repositories::AnswerRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Confirmation body returned by the best-answer endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /v1/questions/{id}/answers
///
/// The body's `question_id`, when present, takes precedence over the path and
/// the path segment is not parsed at all.
pub async fn create(
    State(state): State<AppState>,
    AppPath(path_segment): AppPath<String>,
    AppJson(input): AppJson<CreateAnswer>,
) -> AppResult<(StatusCode, Json<Answer>)> {
    validate_answer_content(&input.content)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let question_id = resolve_answer_question_id(&path_segment, input.question_id)
        .map_err(AppError::BadRequest)?;
    let answer = AnswerRepo::create(&state.pool, question_id, &input).await?;

    tracing::info!(
        answer_id = answer.id,
        question_id,
        user_id = answer.user_id,
        "Answer created",
    );

    Ok((StatusCode::CREATED, Json(answer)))
}

/// POST /v1/questions/{id}/best_answer
///
/// Flag the given answer as best and clear every other answer of the
/// question in one transaction. 404 if the answer is not part of the question.
pub async fn set_best(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
    AppJson(input): AppJson<SetBestAnswer>,
) -> AppResult<Json<MessageResponse>> {
    let answer = AnswerRepo::set_best(&state.pool, question_id, input.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id: input.id,
        }))?;

    tracing::info!(answer_id = answer.id, question_id, "Best answer set");

    Ok(Json(MessageResponse {
        message: BEST_ANSWER_SET_MESSAGE,
    }))
}
