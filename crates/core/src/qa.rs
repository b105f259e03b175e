//! Presence checks and fixed messages for the Q&A endpoints.
//!
//! Checks only confirm that required text is there; length limits and
//! content rules are deliberately absent.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Message returned after a best answer has been recorded.
pub const BEST_ANSWER_SET_MESSAGE: &str = "Best answer set!";

/// Message returned when login finds no matching user.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid credentials";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate registration / login credentials.
///
/// The username must contain something other than whitespace; the password
/// must be non-empty. Passwords are compared verbatim, so they are never
/// trimmed.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a question title: must contain non-whitespace text.
pub fn validate_question_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Question title cannot be empty".to_string());
    }
    Ok(())
}

/// Validate answer content: must contain non-whitespace text.
pub fn validate_answer_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Answer content cannot be empty".to_string());
    }
    Ok(())
}

/// Pick the question an answer is filed under.
///
/// An explicit `question_id` in the request body wins, even if it differs
/// from the path, and the path segment is then never parsed. Without one,
/// the path segment must be a numeric id.
pub fn resolve_answer_question_id(
    path_segment: &str,
    body_id: Option<DbId>,
) -> Result<DbId, String> {
    match body_id {
        Some(id) => Ok(id),
        None => path_segment
            .parse()
            .map_err(|_| format!("Invalid question id '{path_segment}' in path")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
