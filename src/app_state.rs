use std::sync::Arc;

use crate::{
    config::Config,
    services::{OpenAiLlmClient, QuizService, WikipediaClient},
};

/// Read-only state shared by every request: the assembled pipeline and the
/// configuration it was built from. Constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = Arc::new(OpenAiLlmClient::new(&config));
        let topics = Arc::new(WikipediaClient::new(&config));
        let quiz_service = Arc::new(QuizService::new(llm, topics));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }

    /// Builds state around an already-assembled service, letting tests swap
    /// in stub collaborators.
    pub fn with_quiz_service(quiz_service: Arc<QuizService>, config: Config) -> Self {
        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
