use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use oa_api::{build_state, create_app, telemetry};
use oa_core::repositories::UserRepository;
use oa_infra::database::{DatabasePool, InMemoryUserRepository, MySqlUserRepository};
use oa_infra::OtpStore;
use oa_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting OTP auth server"
    );

    match &config.database {
        Some(database) => {
            let pool = DatabasePool::new(database)
                .await
                .context("failed to connect to the user database")?;
            let users = MySqlUserRepository::new(pool.get_pool().clone());
            users
                .ensure_schema()
                .await
                .context("failed to prepare the users table")?;

            let result = serve(&config, Arc::new(users)).await;
            pool.close().await;
            result
        }
        None => {
            tracing::info!("DATABASE_URL not set, keeping users in memory");
            serve(&config, Arc::new(InMemoryUserRepository::new())).await
        }
    }
}

async fn serve<U>(config: &AppConfig, users: Arc<U>) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
{
    let otp_store = Arc::new(OtpStore::from_config(&config.cache));
    let state = web::Data::new(
        build_state(config, users, Arc::clone(&otp_store)).context("invalid configuration")?,
    );

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = match server.bind(&bind_address) {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    otp_store.shutdown().await;
    tracing::info!("Server stopped");

    result.with_context(|| format!("server on {} failed", bind_address))
}
