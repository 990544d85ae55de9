use std::sync::Arc;

use log::info;

use crate::{
    constants::quiz_prompt::build_quiz_prompt,
    errors::AppResult,
    models::domain::QuizQuestion,
    services::{
        llm_service::LlmClient,
        normalizer::normalize_quiz_reply,
        source_resolver::{QuizSource, SourceResolver},
        topic_service::TopicLookup,
    },
};

/// Runs the whole pipeline: resolve source text, build the prompt, call the
/// model, normalize its reply. Stateless across requests; failures propagate
/// to the handler boundary and nothing is retried here.
pub struct QuizService {
    llm: Arc<dyn LlmClient>,
    resolver: SourceResolver,
}

impl QuizService {
    pub fn new(llm: Arc<dyn LlmClient>, topics: Arc<dyn TopicLookup>) -> Self {
        Self {
            llm,
            resolver: SourceResolver::new(topics),
        }
    }

    pub async fn generate_quiz(
        &self,
        source: QuizSource,
        num_questions: u32,
    ) -> AppResult<Vec<QuizQuestion>> {
        let text = self.resolver.resolve(source).await?;
        let prompt = build_quiz_prompt(&text, num_questions);

        let raw_reply = self.llm.generate(&prompt).await?;
        let questions = normalize_quiz_reply(&raw_reply)?;

        info!("generated quiz with {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        services::{llm_service::MockLlmClient, topic_service::MockTopicLookup},
        test_utils::fixtures,
    };

    fn service(llm: MockLlmClient, topics: MockTopicLookup) -> QuizService {
        QuizService::new(Arc::new(llm), Arc::new(topics))
    }

    #[actix_web::test]
    async fn text_source_end_to_end_with_fenced_reply() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .withf(|prompt| {
                prompt.contains("This is the text: Water boils at 100C.")
                    && prompt.contains("Generate a quiz with 1 questions")
            })
            .returning(|_| Ok(fixtures::fenced_water_reply()));

        let questions = service(llm, MockTopicLookup::new())
            .generate_quiz(QuizSource::Text("Water boils at 100C.".to_string()), 1)
            .await
            .unwrap();

        assert_eq!(questions, vec![fixtures::water_question()]);
    }

    #[actix_web::test]
    async fn topic_source_feeds_summary_into_the_prompt() {
        let mut topics = MockTopicLookup::new();
        topics
            .expect_summarize()
            .returning(|_| Ok("Water is an inorganic compound.".to_string()));

        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .withf(|prompt| prompt.contains("This is the text: Water is an inorganic compound."))
            .returning(|_| Ok(fixtures::plain_water_reply()));

        let questions = service(llm, topics)
            .generate_quiz(QuizSource::Topic("Water".to_string()), 1)
            .await
            .unwrap();

        assert_eq!(questions.len(), 1);
    }

    #[actix_web::test]
    async fn provider_failure_surfaces_as_service_error() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .returning(|_| Err(AppError::ServiceError("quota exceeded".to_string())));

        let result = service(llm, MockTopicLookup::new())
            .generate_quiz(QuizSource::Text("some text".to_string()), 5)
            .await;

        assert!(matches!(result, Err(AppError::ServiceError(_))));
    }

    #[actix_web::test]
    async fn unparseable_reply_surfaces_as_malformed_response() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .returning(|_| Ok("sorry, I can't help with that".to_string()));

        let result = service(llm, MockTopicLookup::new())
            .generate_quiz(QuizSource::Text("some text".to_string()), 5)
            .await;

        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[actix_web::test]
    async fn resolver_failure_short_circuits_before_the_llm_call() {
        // MockLlmClient with no expectations panics if called.
        let result = service(MockLlmClient::new(), MockTopicLookup::new())
            .generate_quiz(QuizSource::Text("   ".to_string()), 5)
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
