use actix_web::HttpResponse;
use actix_web::http::header::{self, HeaderMap, HeaderValue};

use crate::config::CorsConfig;

const WILDCARD: &str = "*";

pub struct CorsPolicy {
    any_origin: bool,
    origins: Vec<HeaderValue>,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
    max_age: HeaderValue,
}

fn header_list(values: &[String], fallback: &'static str) -> HeaderValue {
    if values.is_empty() {
        return HeaderValue::from_static(fallback);
    }
    HeaderValue::from_str(&values.join(", ")).unwrap_or_else(|_| {
        log::warn!("invalid CORS header list {:?}, using {:?}", values, fallback);
        HeaderValue::from_static(fallback)
    })
}

impl CorsPolicy {
    pub fn new(config: &CorsConfig) -> Self {
        let any_origin = config.allowed_origins.iter().any(|origin| origin == WILDCARD);
        let origins = config
            .allowed_origins
            .iter()
            .filter(|origin| origin.as_str() != WILDCARD)
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();

        Self {
            any_origin,
            origins,
            allow_methods: header_list(&config.allowed_methods, "POST, OPTIONS"),
            allow_headers: header_list(&config.allowed_headers, "Content-Type"),
            max_age: HeaderValue::from(config.max_age_secs),
        }
    }

    /// A listed origin is echoed; anything else gets the first listed one, which browsers reject.
    pub fn allow_origin(&self, request_origin: Option<&HeaderValue>) -> HeaderValue {
        if self.any_origin {
            return HeaderValue::from_static(WILDCARD);
        }
        if let Some(origin) = request_origin.filter(|origin| self.origins.contains(origin)) {
            return origin.clone();
        }
        self.origins
            .first()
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("null"))
    }

    pub fn apply(&self, headers: &mut HeaderMap, request_origin: Option<&HeaderValue>) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin(request_origin),
        );
        if !self.any_origin {
            headers.append(header::VARY, HeaderValue::from_static("Origin"));
        }
    }

    pub fn preflight(&self) -> HttpResponse {
        HttpResponse::NoContent()
            .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone()))
            .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone()))
            .insert_header((header::ACCESS_CONTROL_MAX_AGE, self.max_age.clone()))
            .finish()
    }
}
