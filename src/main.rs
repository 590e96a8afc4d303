use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod db;
mod state;

use hanzi_dict_backend::config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hanzi_dict_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config(&config::get_config_path()).map_err(anyhow::Error::msg)?;
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    let store = db::open_dictionary(&app_config).await?;
    tracing::info!("Database: {:?}", app_config.get_database_path());

    let upload_dir = app_config.get_upload_dir();
    if !upload_dir.exists() {
        tracing::warn!("Upload directory {:?} not found, images will 404", upload_dir);
    }

    let bind_addr = app_config.get_bind_address();
    let state = Arc::new(AppState::new(app_config, store));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
