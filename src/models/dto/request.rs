use serde::Deserialize;

pub const DEFAULT_NUM_QUESTIONS: u32 = 5;

/// Body of `POST /generate_quiz`. Exactly one of `text`/`topic` is expected;
/// the handler rejects requests that carry neither.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub text: Option<String>,
    pub topic: Option<String>,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

fn default_num_questions() -> u32 {
    DEFAULT_NUM_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_questions_defaults_to_five() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"text": "Water boils at 100C."}"#).unwrap();

        assert_eq!(request.num_questions, 5);
        assert_eq!(request.text.as_deref(), Some("Water boils at 100C."));
        assert!(request.topic.is_none());
    }

    #[test]
    fn explicit_num_questions_is_kept() {
        let request: QuizRequest =
            serde_json::from_str(r#"{"topic": "Rust", "num_questions": 3}"#).unwrap();

        assert_eq!(request.num_questions, 3);
        assert_eq!(request.topic.as_deref(), Some("Rust"));
    }
}
