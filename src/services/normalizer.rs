//! Coerces the model's free-form reply into a validated question list.
//!
//! Models reliably wrap JSON in markdown fences and occasionally nest the
//! array under a top-level key despite being told not to. The normalizer
//! absorbs exactly that variability and nothing more: it never invents field
//! values, and anything it cannot coerce at the container level is rejected.

use log::{debug, error};
use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

/// Normalizes a raw model reply into a list of quiz questions.
///
/// Steps, short-circuiting on failure: trim, strip code fences, parse as
/// JSON, unwrap a single wrapper key, check the value is a list whose every
/// element carries the five question fields.
pub fn normalize_quiz_reply(raw: &str) -> AppResult<Vec<QuizQuestion>> {
    let cleaned = strip_code_fences(raw.trim());

    let parsed: Value = serde_json::from_str(cleaned).map_err(|e| {
        error!("failed to parse model reply as JSON: {}", e);
        error!("raw model reply: {}", raw);
        AppError::MalformedResponse(format!("Failed to parse the quiz JSON: {}", e))
    })?;

    let items = match unwrap_list(parsed) {
        Value::Array(items) => items,
        other => {
            error!("model reply is not a question list: {}", other);
            error!("raw model reply: {}", raw);
            return Err(AppError::MalformedResponse(
                "Quiz data must be a list of questions.".to_string(),
            ));
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<QuizQuestion>(item).map_err(|e| {
                error!("question record is missing required fields: {}", e);
                error!("raw model reply: {}", raw);
                AppError::MalformedResponse(format!("Invalid question record: {}", e))
            })
        })
        .collect()
}

/// Strips markdown code fences. The leading fence (with an optional `json`
/// language tag) and the trailing fence are detected independently, so a
/// reply fenced only at the start is still handled.
fn strip_code_fences(text: &str) -> &str {
    let mut text = text;

    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text
}

/// If the value is an object wrapping the question list under a single key
/// (e.g. `{"quiz": [...]}`), replaces it with the inner list. Objects with no
/// array-valued key pass through unchanged and fail the shape check upstream.
fn unwrap_list(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            let wrapper_key = map
                .iter()
                .find(|(_, v)| v.is_array())
                .map(|(k, _)| k.clone());

            if let Some(key) = wrapper_key {
                debug!("unwrapping question list nested under key \"{}\"", key);
                if let Some(inner) = map.remove(&key) {
                    return inner;
                }
            }

            Value::Object(map)
        }
        other => other,
    }
}
