mod app_state;
mod config;
mod repositories;
mod router;
mod routes;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub(crate) use app_state::AppState;
use crate::config::{Environment, Settings};
use repositories::{InMemoryTravelRepository, MongoTravelRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = crate::config::read_config().context("Failed to read configuration")?;
    let app_state = build_state(&settings).await?;
    let app = router::create(app_state);

    let address = settings.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("API server listening on {}", address);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn build_state(settings: &Settings) -> anyhow::Result<AppState> {
    match (&settings.database.url, settings.application.environment) {
        (Some(url), _) => {
            let repository = MongoTravelRepository::connect(url, &settings.database.name)
                .await
                .context("Failed to create MongoDB client")?;
            Ok(AppState::new(repository))
        }
        (None, Environment::Local) => {
            tracing::warn!("DATABASE_URL is not set, serving the seeded in-memory dataset");
            let repository =
                InMemoryTravelRepository::seeded().context("Failed to load seed data")?;
            Ok(AppState::new(repository))
        }
        (None, Environment::Production) => anyhow::bail!("DATABASE_URL is not set"),
    }
}
