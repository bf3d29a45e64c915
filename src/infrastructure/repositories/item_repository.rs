use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::Item;

/// Storage behind the demo catalog
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn count(&self) -> usize;

    /// Up to `limit` items starting at `offset`, in insertion order
    async fn find_range(&self, offset: usize, limit: usize) -> Vec<Item>;

    async fn find_by_id(&self, id: Uuid) -> Option<Item>;
}

pub struct InMemoryItemRepository {
    items: Vec<Item>,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Repository pre-filled with a small fixed catalog
    pub fn seeded() -> Self {
        let items = [
            ("Espresso", Some("Single shot")),
            ("Americano", None),
            ("Cappuccino", Some("Equal parts espresso, milk and foam")),
            ("Flat white", None),
            ("Cortado", None),
            ("Macchiato", Some("Espresso with a dash of foam")),
            ("Mocha", None),
            ("Lungo", None),
        ]
        .into_iter()
        .map(|(name, description)| Item::new(name, description))
        .collect();
        Self::new(items)
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn count(&self) -> usize {
        self.items.len()
    }

    async fn find_range(&self, offset: usize, limit: usize) -> Vec<Item> {
        self.items.iter().skip(offset).take(limit).cloned().collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }
}
