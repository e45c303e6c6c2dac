//! Server entry-point: loads settings, opens the record store and serves
//! the session and article endpoints.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use article_gate::inbound::http::health::HealthState;
use article_gate::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{AppSettings, RecordStore, ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let store = RecordStore::open(&settings).await?;
    if settings.seed_fixtures {
        store.seed_fixtures().await?;
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(session, bind_addr, store.http_state());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
