mod inmemory;
mod postgres;

pub use inmemory::InMemorySubscriberRepo;
pub use postgres::PostgresSubscriberRepo;

use festivo_domain::NewsletterSubscriber;

#[async_trait::async_trait]
pub trait ISubscriberRepo: Send + Sync {
    async fn insert(&self, subscriber: &NewsletterSubscriber) -> anyhow::Result<()>;
    async fn find_by_email(&self, email: &str) -> Option<NewsletterSubscriber>;
    async fn find_all(&self) -> anyhow::Result<Vec<NewsletterSubscriber>>;
    async fn delete_by_email(&self, email: &str) -> Option<NewsletterSubscriber>;
}
