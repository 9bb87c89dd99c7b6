//! User service entry point: loads settings, picks a user store and serves
//! the REST API.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_service::config::AppSettings;
use user_service::domain::ports::UserRepository;
use user_service::inbound::http::health::HealthState;
use user_service::outbound::memory::InMemoryUserRepository;
use user_service::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let repository = build_repository(&settings).await?;

    let config = ServerConfig::new(settings.bind_addr(), repository);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("users")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(bind_addr = %settings.bind_addr(), "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}

/// PostgreSQL when a database URL is configured, otherwise memory.
async fn build_repository(settings: &AppSettings) -> io::Result<Arc<dyn UserRepository>> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database configured; users are kept in memory");
        return Ok(Arc::new(InMemoryUserRepository::default()));
    };

    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(io::Error::other)?;
    }

    let pool = DbPool::connect(
        PoolConfig::new(database_url)
            .with_max_size(settings.pool_max_size())
            .with_min_idle(settings.pool_min_idle()),
    )
    .await
    .map_err(io::Error::other)?;

    Ok(Arc::new(DieselUserRepository::new(pool)))
}

/// Build Prometheus middleware, logging and dropping it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<E, F>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(e) => {
            warn!(error = %e, "metrics disabled: Prometheus setup failed");
            None
        }
    }
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
    use super::*;

    #[test]
    fn initialize_metrics_returns_none_on_error() {
        assert!(initialize_metrics(|| -> Result<_, &str> { Err("boom") }).is_none());
    }

    #[test]
    fn initialize_metrics_returns_metrics_on_success() {
        let metrics = initialize_metrics(|| {
            PrometheusMetricsBuilder::new("test")
                .endpoint("/metrics")
                .build()
        });
        assert!(metrics.is_some());
    }
}
