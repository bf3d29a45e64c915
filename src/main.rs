use jsonresp::controllers::item::ItemController;
use jsonresp::domain::catalog::CatalogService;
use jsonresp::infrastructure::config::{Config, LogFormat};
use jsonresp::infrastructure::http::start_http_server;
use jsonresp::infrastructure::repositories::InMemoryItemRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting jsonresp demo on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    let item_repo = Arc::new(InMemoryItemRepository::seeded());
    let catalog_service = Arc::new(CatalogService::new(
        item_repo,
        config.default_page_size,
        config.max_page_size,
    ));
    let item_controller = Arc::new(ItemController::new(catalog_service));

    start_http_server(config, item_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jsonresp=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
