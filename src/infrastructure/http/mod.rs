pub mod request_id;
pub mod sink;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, item::{self, ItemController}};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};
pub use sink::{BufferedSink, JsonResponse};

/// Build the demo router
pub fn create_router(item_controller: Arc<ItemController>) -> Router {
    let item_routes = Router::new()
        .route("/api/items", get(ItemController::list_items))
        .route("/api/items/:id", get(ItemController::get_item))
        .with_state(item_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(item_routes)
        .fallback(item::not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    item_controller: Arc<ItemController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(item_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
