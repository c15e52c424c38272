use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::stream::StreamExt;
use serde::Serialize;

use crate::algorithm::recommend;
use crate::config::ScoringConfig;
use crate::error::SubmitError;
use crate::models::TopMinors;
use crate::survey::{normalize, RawSubmission};

/// Tamaño máximo aceptado para el cuerpo de una encuesta.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    top_5_minors: TopMinors,
}

/// POST /api/submit (y el alias /submit)
/// Recibe la encuesta como `application/x-www-form-urlencoded` o
/// `multipart/form-data` y devuelve los 5 minors con mayor puntaje.
pub async fn submit_handler(
    req: HttpRequest,
    payload: web::Payload,
    config: web::Data<ScoringConfig>,
) -> Result<HttpResponse, SubmitError> {
    let raw = match read_submission(&req, payload).await {
        Ok(r) => r,
        Err(e) => {
            log::warn!("rejected submission: {}", e);
            return Err(e);
        }
    };

    let survey = normalize(&raw);
    log::debug!(
        "normalized survey ({} fields): selected={:?} dual={:?} inputs={:?}",
        raw.len(),
        survey.selected,
        survey.dual,
        survey.inputs
    );

    let top = recommend(config.get_ref(), &survey);
    log::info!(
        "top minors: {}",
        top.iter().map(|m| format!("{}={}", m.name, m.score)).collect::<Vec<_>>().join(", ")
    );

    Ok(HttpResponse::Ok().json(SubmitResponse { success: true, top_5_minors: top }))
}

async fn read_submission(
    req: &HttpRequest,
    payload: web::Payload,
) -> Result<RawSubmission, SubmitError> {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        read_multipart(Multipart::new(req.headers(), payload)).await
    } else {
        read_urlencoded(payload).await
    }
}

async fn read_urlencoded(mut payload: web::Payload) -> Result<RawSubmission, SubmitError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(SubmitError::TooLarge { limit: MAX_BODY_BYTES });
        }
        body.extend_from_slice(&chunk);
    }
    RawSubmission::from_urlencoded(&body)
}

/// Solo campos de texto; un archivo adjunto se lee igual como texto y, si no
/// es UTF-8, el request falla.
async fn read_multipart(mut multipart: Multipart) -> Result<RawSubmission, SubmitError> {
    let mut raw = RawSubmission::default();
    let mut total = 0usize;

    while let Some(field_res) = multipart.next().await {
        let mut field = field_res?;
        let name = field.content_disposition().and_then(|cd| cd.get_name()).unwrap_or("").to_string();

        let mut value: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk?;
            total += bytes.len();
            if total > MAX_BODY_BYTES {
                return Err(SubmitError::TooLarge { limit: MAX_BODY_BYTES });
            }
            value.extend_from_slice(&bytes);
        }

        if name.is_empty() {
            continue;
        }
        let text = String::from_utf8(value)
            .map_err(|e| SubmitError::Encoding(format!("field '{}': {}", name, e)))?;
        raw.push(name, text);
    }

    Ok(raw)
}
