mod cli;

use crate::cli::CLI;
use clap::Parser;
use reel_catalog::CatalogService;
use reel_gateway::{serve, App, AppState, CorsConfig};
use reel_generator::UuidGenerator;
use reel_storage::{InMemoryRepository, ReadRepository};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    reel_telemetry::init(config.log_format.into())?;

    let repository = match &config.seed_path {
        Some(path) => InMemoryRepository::from_seed_file(path)?,
        None => InMemoryRepository::seeded()?,
    };
    info!(
        movies = repository.count().await?,
        seed = %config
            .seed_path
            .as_ref()
            .map_or_else(|| "bundled".to_string(), |path| path.display().to_string()),
        "catalog seeded"
    );

    let catalog = CatalogService::new(repository, UuidGenerator::new());
    let state = AppState::new(Arc::new(catalog));
    let cors = CorsConfig::from_origins(config.allowed_origins.iter().cloned());
    let router = App::router(state, cors);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        allowed_origins = ?config.allowed_origins,
        log_format = %config.log_format,
        "starting gateway server"
    );

    serve(listener, router).await?;
    info!("gateway server stopped");
    Ok(())
}
