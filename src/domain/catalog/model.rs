use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry of the demo catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

/// Query string of `GET /api/items`
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    /// Opaque cursor taken from a previous `page.next` or `page.prev`
    pub page: Option<String>,
    pub size: Option<usize>,
}
