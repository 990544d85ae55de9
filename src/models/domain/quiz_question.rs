use serde::{Deserialize, Serialize};

/// A single multiple-choice question as produced by the model. Constructed
/// fresh per request and discarded once the HTTP response is sent; there is
/// no identity beyond its position in the returned list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question_number: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}
