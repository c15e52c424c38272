use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errores al leer la configuración del entorno.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    Port(String),

    #[error("invalid MINORS_PHYSICS_DUAL value '{0}' (expected 'suppress' or 'exclude')")]
    PhysicsDualPolicy(String),

    #[error("invalid boolean for {key}: '{value}'")]
    Bool { key: &'static str, value: String },
}

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    }
}

/// Fallos al leer o decodificar el cuerpo de una encuesta. Se reportan una
/// sola vez en el borde del request, sin resultados parciales.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to read request body: {0}")]
    Payload(String),

    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("multipart error: {0}")]
    Multipart(String),

    #[error("invalid form encoding: {0}")]
    Encoding(String),
}

impl From<serde_urlencoded::de::Error> for SubmitError {
    fn from(e: serde_urlencoded::de::Error) -> Self {
        SubmitError::Encoding(e.to_string())
    }
}

impl From<actix_multipart::MultipartError> for SubmitError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        SubmitError::Multipart(e.to_string())
    }
}

impl From<actix_web::error::PayloadError> for SubmitError {
    fn from(e: actix_web::error::PayloadError) -> Self {
        SubmitError::Payload(e.to_string())
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(json!({"success": false, "error": self.to_string()}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_is_its_own_failure() {
        let err = SubmitError::TooLarge { limit: 65536 };
        assert_eq!(err.to_string(), "request body exceeds 65536 bytes");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(!matches!(err, SubmitError::Payload(_)));
    }

    #[test]
    fn payload_failure_keeps_reader_message() {
        let err = SubmitError::from(actix_web::error::PayloadError::Incomplete(None));
        assert!(matches!(err, SubmitError::Payload(_)));
        assert!(err.to_string().starts_with("failed to read request body"));
    }
}
