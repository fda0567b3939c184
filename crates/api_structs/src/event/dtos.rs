use festivo_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub date: i64,
    pub image: Option<String>,
    pub category: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            date: event.date,
            image: event.image,
            category: event.category,
            created_at: event.created,
            updated_at: event.updated,
        }
    }
}
