use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use futures::TryStreamExt;
use serde_json::json;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::dto::{request::DEFAULT_NUM_QUESTIONS, QuizRequest},
    services::QuizSource,
};

#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({"message": "Hello, welcome to the quiz generator!"}))
}

#[post("/generate_quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let (source, num_questions) = QuizSource::from_request(request.into_inner())?;
    let questions = state.quiz_service.generate_quiz(source, num_questions).await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/upload_pdf")]
pub async fn upload_pdf(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let (source, num_questions) = parse_pdf_upload(payload).await?;
    let questions = state.quiz_service.generate_quiz(source, num_questions).await?;
    Ok(HttpResponse::Ok().json(questions))
}

/// Collects the `file` field (and an optional `num_questions` text field)
/// from the multipart form. Unknown fields are drained and ignored.
async fn parse_pdf_upload(mut payload: Multipart) -> AppResult<(QuizSource, u32)> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut num_questions = DEFAULT_NUM_QUESTIONS;

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .unwrap_or("")
            .to_string();

        match name.as_str() {
            "file" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or("upload")
                    .to_string();
                let content_type = field.content_type().map(|mime| mime.to_string());

                let mut data = Vec::new();
                while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
                    data.extend_from_slice(&chunk);
                }

                file = Some((filename, content_type, data));
            }
            "num_questions" => {
                let mut raw = Vec::new();
                while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
                    raw.extend_from_slice(&chunk);
                }

                let value = String::from_utf8_lossy(&raw);
                let value = value.trim();
                if !value.is_empty() {
                    num_questions = value.parse().map_err(|_| {
                        AppError::InvalidInput(format!(
                            "num_questions must be a positive integer, got \"{}\"",
                            value
                        ))
                    })?;
                }
            }
            _ => {
                while field.try_next().await.map_err(multipart_error)?.is_some() {}
            }
        }
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::InvalidInput("No file uploaded.".to_string()))?;

    Ok((
        QuizSource::PdfBytes {
            filename,
            content_type,
            data,
        },
        num_questions,
    ))
}

fn multipart_error(err: actix_multipart::MultipartError) -> AppError {
    AppError::InvalidInput(format!("failed to read multipart form: {}", err))
}
