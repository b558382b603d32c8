use std::sync::Arc;
use std::time::Duration;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;

use crate::{
    config::{Config, StoreBackend},
    domain::repositories::UserRepository,
    infrastructure::{
        logging,
        repositories::{in_memory::InMemoryUserRepository, postgres},
    },
    presentation::http::{build_app, endpoints::root::ApiState},
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse()?;
    logging::init(config.log_format);

    let repo = connect_store(&config).await?;
    let state = Arc::new(ApiState::new(repo));

    let bind_address = config.bind_address();
    let app = build_app(state, format!("http://{bind_address}"));

    info!(address = %bind_address, backend = ?config.store_backend, "starting server");

    Server::new(TcpListener::bind(bind_address))
        .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_GRACE))
        .await?;

    info!("server stopped");
    Ok(())
}

async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn UserRepository>> {
    match config.store_backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryUserRepository::new())),
        StoreBackend::Postgres => {
            let pool =
                postgres::connect(&config.database_url, config.database_max_connections).await?;
            info!("connected to the database");

            if config.run_migrations {
                postgres::migrate(&pool).await?;
                info!("database migrations applied");
            }

            Ok(postgres::PostgresUserRepository::new(pool))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
