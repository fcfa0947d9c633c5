mod config;
mod error;
mod model;
mod prompt;
mod web;

use std::sync::Arc;

use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use anyhow::Context as _;
use dotenv::dotenv;
use log::{info, warn};
use tera::Tera;

use config::AppConfig;
use model::{Gateway, OpenAiClient};
use web::routes;

// App state structure; immutable once the server is running
pub struct AppState {
    tera: Tera,
    gateway: Gateway,
    credential_configured: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting expert assistant web application");

    let config = AppConfig::from_env().context("failed to read configuration")?;
    if !config.credential_configured() {
        warn!("OPENAI_API_KEY is not set; submissions will be rejected until it is configured");
    }

    let client = Arc::new(OpenAiClient::from_config(&config));
    let gateway = Gateway::new(client, config.model.clone());
    info!("Answering with model {}", gateway.model());

    // Initialize template engine
    let mut tera = Tera::new(&config.template_glob())
        .with_context(|| format!("template parsing error in {}", config.template_dir))?;
    tera.autoescape_on(vec![".html"]);

    let app_state = Data::new(AppState {
        tera,
        gateway,
        credential_configured: config.credential_configured(),
    });

    let static_dir = config.static_dir.clone();
    info!("Listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", static_dir.as_str()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
