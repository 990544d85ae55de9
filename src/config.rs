use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub allowed_origin: String,
    pub wikipedia_api_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Reads configuration from the environment. `OPENAI_API_KEY` is the only
    /// required variable; everything else has a default.
    pub fn from_env() -> AppResult<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            AppError::ServiceError(
                "OPENAI_API_KEY is not set in the environment variables".to_string(),
            )
        })?;

        Ok(Self {
            openai_api_key: SecretString::from(openai_api_key),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "https://quizapp-frontend-chi.vercel.app".to_string()),
            wikipedia_api_url: env::var("WIKIPEDIA_API_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org/w/api.php".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_model: "gpt-3.5-turbo".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
            wikipedia_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
        }
    }
}
