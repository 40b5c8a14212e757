use actix_web::web::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::config::ApiKey;
use crate::consts;
use crate::errors::GatewayError;
use crate::models::request::UpstreamRequest;

pub struct UpstreamReply {
    pub status: u16,
    pub body: Bytes,
}

pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl UpstreamClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_version: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
        }
    }

    pub fn messages_url(&self) -> String {
        format!("{}{}", self.base_url, consts::MESSAGES_PATH)
    }

    /// One POST, no retry. Non-2xx replies become `UpstreamError` with the body text intact.
    pub async fn send_messages(
        &self,
        api_key: &ApiKey,
        request: &UpstreamRequest,
    ) -> Result<UpstreamReply, GatewayError> {
        let response = self
            .client
            .post(self.messages_url())
            .header(CONTENT_TYPE, "application/json")
            .header(consts::API_KEY_HEADER, api_key.expose())
            .header(consts::API_VERSION_HEADER, &self.api_version)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(GatewayError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(UpstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}
