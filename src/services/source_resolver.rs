use std::sync::Arc;

use log::debug;

use crate::{
    errors::{AppError, AppResult},
    models::dto::QuizRequest,
    services::{
        pdf_service::{extract_pdf_text, is_pdf},
        topic_service::TopicLookup,
    },
};

/// The three places a quiz's source material can come from. One resolver
/// handles all of them so `/generate_quiz` and `/upload_pdf` share a single
/// path into the pipeline.
#[derive(Debug, Clone)]
pub enum QuizSource {
    Text(String),
    Topic(String),
    PdfBytes {
        filename: String,
        content_type: Option<String>,
        data: Vec<u8>,
    },
}

impl QuizSource {
    /// Splits a request body into a source and the question count. Text wins
    /// over topic when both are present; neither is a client error.
    pub fn from_request(request: QuizRequest) -> AppResult<(QuizSource, u32)> {
        let num_questions = request.num_questions;

        if let Some(text) = request.text.filter(|t| !t.trim().is_empty()) {
            return Ok((QuizSource::Text(text), num_questions));
        }
        if let Some(topic) = request.topic.filter(|t| !t.trim().is_empty()) {
            return Ok((QuizSource::Topic(topic), num_questions));
        }

        Err(AppError::InvalidInput(
            "Either text or topic is required for quiz generation.".to_string(),
        ))
    }
}

/// Turns a [`QuizSource`] into non-empty source text, or fails.
pub struct SourceResolver {
    topics: Arc<dyn TopicLookup>,
}

impl SourceResolver {
    pub fn new(topics: Arc<dyn TopicLookup>) -> Self {
        Self { topics }
    }

    pub async fn resolve(&self, source: QuizSource) -> AppResult<String> {
        match source {
            QuizSource::Text(text) => {
                if text.trim().is_empty() {
                    return Err(AppError::InvalidInput(
                        "no source material supplied".to_string(),
                    ));
                }
                Ok(text)
            }
            QuizSource::Topic(topic) => {
                let summary = self.topics.summarize(&topic).await?;
                if summary.trim().is_empty() {
                    return Err(AppError::NotFound(
                        "No content found for the given topic.".to_string(),
                    ));
                }
                Ok(summary)
            }
            QuizSource::PdfBytes {
                filename,
                content_type,
                data,
            } => {
                if !is_pdf(&filename, content_type.as_deref(), &data) {
                    return Err(AppError::InvalidInput(
                        "Only PDF files are allowed.".to_string(),
                    ));
                }
                debug!("extracting text from uploaded PDF: {}", filename);
                extract_pdf_text(&data)
            }
        }
    }
}
