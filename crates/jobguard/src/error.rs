use crate::analysis::{AnalysisError, LexiconError};
use crate::company::{DirectoryError, LookupError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Serialization(serde_json::Error),
    Request(JsonRejection),
    Lexicon(LexiconError),
    Directory(DirectoryError),
    Analysis(AnalysisError),
    Lookup(LookupError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Analysis(_) | AppError::Lookup(_) => StatusCode::BAD_REQUEST,
            AppError::Request(rejection) => rejection.status(),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Serialization(_)
            | AppError::Lexicon(_)
            | AppError::Directory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
            AppError::Request(rejection) => write!(f, "{}", rejection.body_text()),
            AppError::Lexicon(err) => write!(f, "lexicon error: {}", err),
            AppError::Directory(err) => write!(f, "company directory error: {}", err),
            AppError::Analysis(err) => write!(f, "{}", err),
            AppError::Lookup(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Serialization(err) => Some(err),
            AppError::Request(rejection) => Some(rejection),
            AppError::Lexicon(err) => Some(err),
            AppError::Directory(err) => Some(err),
            AppError::Analysis(err) => Some(err),
            AppError::Lookup(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_client_error() {
            self.to_string()
        } else {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::Request(value)
    }
}

impl From<LexiconError> for AppError {
    fn from(value: LexiconError) -> Self {
        Self::Lexicon(value)
    }
}

impl From<DirectoryError> for AppError {
    fn from(value: DirectoryError) -> Self {
        Self::Directory(value)
    }
}

impl From<AnalysisError> for AppError {
    fn from(value: AnalysisError) -> Self {
        Self::Analysis(value)
    }
}

impl From<LookupError> for AppError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}
