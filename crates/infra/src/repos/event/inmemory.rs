use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use festivo_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn save(&self, event: &Event) -> anyhow::Result<()> {
        save(event, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn find_all(&self, category: Option<&str>) -> Vec<Event> {
        let mut events = find_by(&self.events, |event| {
            category
                .map(|category| event.category == category)
                .unwrap_or(true)
        });
        events.sort_by_key(|event| event.date);
        events
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }
}
