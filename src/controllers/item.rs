use axum::extract::{Path, Query, State};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::catalog::{CatalogService, CatalogServiceApi, Item, ListItemsQuery};
use crate::domain::envelope::ApiError;
use crate::infrastructure::http::JsonResponse;

pub struct ItemController {
    catalog_service: Arc<CatalogService>,
}

impl ItemController {
    pub fn new(catalog_service: Arc<CatalogService>) -> Self {
        Self { catalog_service }
    }

    /// GET /api/items - One page of the catalog
    pub async fn list_items(
        State(controller): State<Arc<ItemController>>,
        Query(query): Query<ListItemsQuery>,
    ) -> Result<JsonResponse<Vec<Item>>, ApiError> {
        let (items, page) = controller
            .catalog_service
            .list_items(query.page.as_deref(), query.size)
            .await?;
        Ok(JsonResponse::ok(items).page(page))
    }

    /// GET /api/items/{id} - Single item
    pub async fn get_item(
        State(controller): State<Arc<ItemController>>,
        Path(id): Path<Uuid>,
    ) -> Result<JsonResponse<Item>, ApiError> {
        let item = controller.catalog_service.get_item(id).await?;
        Ok(JsonResponse::ok(item))
    }
}

/// Unmatched routes answer with an error envelope
pub async fn not_found() -> ApiError {
    ApiError::new(404, "no such route")
}
