//! Email capture endpoint.

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, http::header, web};
use futures::StreamExt;

use launchpad_core::{SignupFields, SignupOutcome};
use launchpad_shared::SignupResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Largest signup body we bother decoding.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Identity used for rate limiting.
///
/// Prefers the trusted proxy header, then the first `X-Forwarded-For` hop.
/// Requests carrying neither share the `unknown` bucket.
pub fn client_identity(req: &HttpRequest, trusted_header: &str) -> String {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    header(trusted_header)
        .or_else(|| {
            header("x-forwarded-for")
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        })
        .unwrap_or("unknown")
        .to_string()
}

/// POST /api/signup
pub async fn signup(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    let identity = client_identity(&req, &state.trusted_ip_header);
    let fields = read_fields(&req, payload).await;

    let outcome = state
        .registrar
        .register(&fields, &identity, chrono::Utc::now())
        .await?;

    Ok(match outcome {
        SignupOutcome::Registered => HttpResponse::Ok().json(SignupResponse::registered()),
        SignupOutcome::AlreadyRegistered => {
            HttpResponse::Ok().json(SignupResponse::already_signed_up())
        }
        SignupOutcome::InvalidEmail => {
            HttpResponse::BadRequest().json(SignupResponse::invalid_email())
        }
        SignupOutcome::RateLimited { retry_after } => {
            let retry_secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            HttpResponse::TooManyRequests()
                .insert_header(("X-RateLimit-Remaining", "0"))
                .insert_header((header::RETRY_AFTER, retry_secs.to_string()))
                .json(SignupResponse::rate_limited())
        }
    })
}

/// Decode the body by declared content type. Never fails: anything
/// unreadable becomes an empty field map.
async fn read_fields(req: &HttpRequest, payload: web::Payload) -> SignupFields {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let fields = match content_type {
        Some(ct) if ct.trim_start().to_ascii_lowercase().starts_with("multipart/form-data") => {
            read_multipart(req, payload).await
        }
        _ => read_body(payload)
            .await
            .map(|body| SignupFields::from_body(content_type, &body)),
    };

    fields.unwrap_or_else(|| {
        tracing::debug!("Signup body unreadable, treating as empty");
        SignupFields::default()
    })
}

async fn read_body(mut payload: web::Payload) -> Option<web::BytesMut> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.ok()?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return None;
        }
        body.extend_from_slice(&chunk);
    }
    Some(body)
}

async fn read_multipart(req: &HttpRequest, payload: web::Payload) -> Option<SignupFields> {
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut pairs = Vec::new();
    let mut total = 0;

    while let Some(field) = multipart.next().await {
        let mut field = field.ok()?;
        let disposition = field.content_disposition();
        let is_file = disposition.and_then(|cd| cd.get_filename()).is_some();
        let name = disposition
            .and_then(|cd| cd.get_name())
            .filter(|_| !is_file)
            .map(str::to_owned);

        let mut value = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.ok()?;
            total += chunk.len();
            if total > MAX_BODY_BYTES {
                return None;
            }
            value.extend_from_slice(&chunk);
        }

        // File parts are drained but ignored, as are non-UTF-8 values.
        if let (Some(name), Ok(text)) = (name, String::from_utf8(value)) {
            pairs.push((name, text));
        }
    }

    Some(SignupFields::from_pairs(pairs))
}
