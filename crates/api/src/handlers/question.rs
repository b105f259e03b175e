//! Handlers for the `/v1/questions` resource.

use askhub_core::error::CoreError;
use askhub_core::qa::validate_question_title;
use askhub_db::models::question::{CreateQuestion, QuestionWithAnswers};
use askhub_db::repositories::QuestionRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /v1/questions
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<QuestionWithAnswers>)> {
    validate_question_title(&input.title)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        question_id = question.id,
        user_id = question.user_id,
        "Question created"
    );

    Ok((
        StatusCode::CREATED,
        Json(QuestionWithAnswers::unanswered(question)),
    ))
}

/// GET /v1/questions
///
/// Every question with its answers attached.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<QuestionWithAnswers>>> {
    let questions = QuestionRepo::list_with_answers(&state.pool).await?;
    Ok(Json(questions))
}
