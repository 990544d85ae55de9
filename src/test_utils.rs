pub mod fixtures {
    use crate::models::domain::QuizQuestion;

    /// The single-question quiz used throughout the pipeline tests.
    pub fn water_question() -> QuizQuestion {
        QuizQuestion {
            question_number: 1,
            question: "At what temperature does water boil?".to_string(),
            options: vec!["90C".to_string(), "100C".to_string(), "110C".to_string()],
            answer: "100C".to_string(),
            explanation: "Standard boiling point at sea level.".to_string(),
        }
    }

    /// A well-behaved model reply: a bare JSON array.
    pub fn plain_water_reply() -> String {
        serde_json::to_string(&vec![water_question()]).expect("fixture should serialize")
    }

    /// The same reply wrapped in a markdown fence, the way models usually
    /// return it despite instructions.
    pub fn fenced_water_reply() -> String {
        format!("```json\n{}\n```", plain_water_reply())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn fixture_replies_contain_the_question() {
        assert!(plain_water_reply().contains("At what temperature does water boil?"));
        assert!(fenced_water_reply().starts_with("```json\n"));
        assert!(fenced_water_reply().ends_with("\n```"));
    }
}
