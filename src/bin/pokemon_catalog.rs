use std::process::ExitCode;
use std::sync::Arc;

use pokemon_catalog::{http, CatalogService, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        store = %config.store_path.display(),
        csv = %config.csv_path.display(),
        images = %config.images_dir.display(),
        "starting pokemon catalog"
    );

    let service = Arc::new(CatalogService::new(config.store(), config.loader()));
    match http::serve(service, &config.bind_addr()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server error");
            ExitCode::FAILURE
        }
    }
}
