use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::database::{seed, RosterStore};
use activities::web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;

    let catalog = match &config.seed_path {
        Some(path) => seed::load_catalog(path)
            .with_context(|| format!("loading seed catalog from {}", path.display()))?,
        None => seed::default_catalog().context("loading embedded seed catalog")?,
    };
    let store = RosterStore::new(catalog);
    info!(activities = store.len(), "roster loaded");

    let app = build_router(AppState::new(store), &config.static_dir);

    let addr = config.listen_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .with_context(|| format!("binding {} failed: {}", addr, e))?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
