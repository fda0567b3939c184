mod inmemory;
mod postgres;

pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

use festivo_domain::{Event, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &Event) -> anyhow::Result<()>;
    async fn save(&self, event: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    /// Events ordered by date, optionally restricted to one category
    async fn find_all(&self, category: Option<&str>) -> Vec<Event>;
    async fn delete(&self, event_id: &ID) -> Option<Event>;
}

#[cfg(test)]
mod tests {
    use crate::FestivoContext;
    use festivo_domain::{Entity, Event};

    const NOW: i64 = 1767276000000; // Thu Jan 01 2026 14:00:00 GMT+0000

    #[tokio::test]
    async fn create_update_and_delete() {
        let ctx = FestivoContext::create_inmemory();
        let mut event = Event::new("Winter Gala", NOW + 1000 * 60 * 60 * 24 * 30, NOW);
        event.category = "corporate".into();

        assert!(ctx.repos.events.insert(&event).await.is_ok());

        event.description = "Black tie dinner with live music".into();
        assert!(ctx.repos.events.save(&event).await.is_ok());

        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert!(stored.eq(&event));
        assert_eq!(stored.description, event.description);

        assert!(ctx.repos.events.delete(&event.id).await.is_some());
        assert!(ctx.repos.events.find(&event.id).await.is_none());
    }

    #[tokio::test]
    async fn find_all_filters_on_category() {
        let ctx = FestivoContext::create_inmemory();
        let mut wedding = Event::new("Garden Wedding", NOW + 1000, NOW);
        wedding.category = "wedding".into();
        let mut gala = Event::new("Winter Gala", NOW + 2000, NOW);
        gala.category = "corporate".into();
        let uncategorized = Event::new("Open House", NOW + 3000, NOW);
        for e in [&wedding, &gala, &uncategorized] {
            ctx.repos.events.insert(e).await.unwrap();
        }

        let every_event = ctx.repos.events.find_all(None).await;
        assert_eq!(every_event.len(), 3);

        let weddings = ctx.repos.events.find_all(Some("wedding")).await;
        assert_eq!(weddings.len(), 1);
        assert!(weddings[0].eq(&wedding));
    }
}
