use std::time::Instant;

use actix_web::http::{Method, header};
use actix_web::web::{Bytes, Data, Payload};
use actix_web::{HttpRequest, HttpResponse, mime};

use crate::cors::CorsPolicy;
use crate::errors::GatewayError;
use crate::gateway::ForwardingGateway;
use crate::models::response::ErrorBody;

pub fn error_response(error: &GatewayError) -> HttpResponse {
    let mut builder = HttpResponse::build(error.status());
    if let GatewayError::MethodNotAllowed = error {
        builder.insert_header((header::ALLOW, "POST, OPTIONS"));
    }
    builder.json(ErrorBody {
        error: error.client_message().to_string(),
    })
}

async fn read_body(payload: Payload, limit: usize) -> Result<Bytes, GatewayError> {
    match payload.to_bytes_limited(limit).await {
        Ok(body) => body.map_err(|e| GatewayError::InternalFault(e.to_string())),
        Err(_) => Err(GatewayError::payload_too_large(limit)),
    }
}

/// Single entry point for every method on the chat route.
/// The body stays unread until the method is known to be POST.
pub async fn chat(
    request: HttpRequest,
    payload: Payload,
    gateway: Data<ForwardingGateway>,
    cors: Data<CorsPolicy>,
) -> HttpResponse {
    let started = Instant::now();

    if request.method() == Method::OPTIONS {
        return cors.preflight();
    }
    if request.method() != Method::POST {
        log::info!("rejecting {} {}", request.method(), request.path());
        return error_response(&GatewayError::MethodNotAllowed);
    }

    let body = match read_body(payload, gateway.config().max_body_bytes).await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("rejecting request body: {}", e);
            return error_response(&e);
        }
    };

    let caller = gateway.caller_identity(request.headers());

    match gateway.complete(&body, &caller, started).await {
        Ok(payload) => HttpResponse::Ok()
            .content_type(mime::APPLICATION_JSON)
            .body(payload),
        Err(e) => {
            log::error!("chat completion error: {:?}", e);
            error_response(&e)
        }
    }
}
