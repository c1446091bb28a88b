use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use wa_core::WordsApiConfig;
use wa_server::{app_with_state, state::AppState};
use wa_storage::{GameStore, MemoryGameStore};
use wa_words::WordContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wa_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = WordsApiConfig::from_env().context("invalid configuration")?;

    // No traffic is served without word data.
    let words = WordContext::load(&config.data, &config.selector)
        .context("failed to load word data")?;

    let games = open_game_store(&config).await?;
    games.init().await.context("failed to initialise game store")?;

    let app = app_with_state(AppState::new(words, games));

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!("words-api listening on http://{addr}");
    for route in ["/random", "/word/{word}", "/word", "/wordle", "/wordle/{id}"] {
        tracing::info!("  http://{addr}{route}");
    }

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[cfg(feature = "postgres")]
async fn open_game_store(config: &WordsApiConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    match &config.database.url {
        Some(url) => {
            let store = wa_storage::PgGameStore::connect(url, config.database.max_connections)
                .await
                .context("failed to connect to database")?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; wordle games are kept in memory only");
            Ok(Arc::new(MemoryGameStore::new()))
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn open_game_store(config: &WordsApiConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    if config.database.url.is_some() {
        tracing::warn!("built without the postgres feature; ignoring DATABASE_URL");
    }
    Ok(Arc::new(MemoryGameStore::new()))
}
