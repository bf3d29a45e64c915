use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::error::CatalogServiceError;
use super::model::Item;
use crate::domain::envelope::PageDetails;
use crate::infrastructure::repositories::ItemRepository;

pub struct CatalogService {
    item_repo: Arc<dyn ItemRepository>,
    default_page_size: usize,
    max_page_size: usize,
}

impl CatalogService {
    pub fn new(
        item_repo: Arc<dyn ItemRepository>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> Self {
        Self {
            item_repo,
            default_page_size,
            max_page_size,
        }
    }
}

#[async_trait]
pub trait CatalogServiceApi: Send + Sync {
    /// One page of items starting at `cursor`, with cursors to the adjacent pages
    async fn list_items(
        &self,
        cursor: Option<&str>,
        size: Option<usize>,
    ) -> Result<(Vec<Item>, PageDetails), CatalogServiceError>;

    async fn get_item(&self, id: Uuid) -> Result<Item, CatalogServiceError>;
}

#[async_trait]
impl CatalogServiceApi for CatalogService {
    async fn list_items(
        &self,
        cursor: Option<&str>,
        size: Option<usize>,
    ) -> Result<(Vec<Item>, PageDetails), CatalogServiceError> {
        let total = self.item_repo.count().await;
        let offset = decode_cursor(cursor, total)?;
        let size = match size {
            Some(0) => {
                return Err(CatalogServiceError::Invalid(
                    "size must be greater than zero".to_string(),
                ))
            }
            Some(size) => size.min(self.max_page_size),
            None => self.default_page_size,
        };

        let items = self.item_repo.find_range(offset, size).await;
        let page = page_details(offset, size, total);

        tracing::debug!(offset, size, total, returned = items.len(), "listed items");

        Ok((items, page))
    }

    async fn get_item(&self, id: Uuid) -> Result<Item, CatalogServiceError> {
        self.item_repo
            .find_by_id(id)
            .await
            .ok_or(CatalogServiceError::NotFound)
    }
}

/// Cursors are item offsets rendered as decimal strings, at most `total`
fn decode_cursor(cursor: Option<&str>, total: usize) -> Result<usize, CatalogServiceError> {
    let raw = match cursor {
        None | Some("") => return Ok(0),
        Some(raw) => raw,
    };
    match raw.parse::<usize>() {
        Ok(offset) if offset <= total => Ok(offset),
        _ => Err(CatalogServiceError::Invalid(format!("invalid page cursor '{}'", raw))),
    }
}

fn page_details(offset: usize, size: usize, total: usize) -> PageDetails {
    let prev = if offset > 0 {
        offset.saturating_sub(size).to_string()
    } else {
        String::new()
    };
    let end = offset.saturating_add(size);
    let next = if end < total {
        end.to_string()
    } else {
        String::new()
    };

    PageDetails {
        prev,
        next,
        total_size: i64::try_from(total).unwrap_or(i64::MAX),
    }
}
