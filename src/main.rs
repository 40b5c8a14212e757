use std::io;
use std::sync::Arc;
use std::time::Duration;

use fba_chat_gateway::app::create_app;
use fba_chat_gateway::config;
use fba_chat_gateway::gateway::ForwardingGateway;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing FBA chat gateway...");

    let config = config::load_config().map_err(|e| {
        log::error!("failed to load config: {}", e);
        io::Error::other(e)
    })?;

    if config.api_key.is_none() {
        log::warn!(
            "{} is not set; completion requests will fail until it is configured",
            config.api_key_env
        );
    }

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(io::Error::other)?;

    let bind_address = (config.bind_address.clone(), config.port);
    let gateway = Arc::new(ForwardingGateway::new(http_client, Arc::new(config)));

    log::info!(
        "listening on {}:{}, upstream {}",
        bind_address.0,
        bind_address.1,
        gateway.config().upstream_url
    );

    actix_web::HttpServer::new(move || create_app(gateway.clone()))
        .bind(bind_address)?
        .run()
        .await
}
