pub mod llm_service;
pub mod normalizer;
pub mod pdf_service;
pub mod quiz_service;
pub mod source_resolver;
pub mod topic_service;

pub use llm_service::{LlmClient, OpenAiLlmClient};
pub use quiz_service::QuizService;
pub use source_resolver::QuizSource;
pub use topic_service::{TopicLookup, WikipediaClient};
