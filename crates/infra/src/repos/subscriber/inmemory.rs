use super::ISubscriberRepo;
use crate::repos::shared::inmemory_repo::*;
use festivo_domain::NewsletterSubscriber;

pub struct InMemorySubscriberRepo {
    subscribers: std::sync::Mutex<Vec<NewsletterSubscriber>>,
}

impl InMemorySubscriberRepo {
    pub fn new() -> Self {
        Self {
            subscribers: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISubscriberRepo for InMemorySubscriberRepo {
    async fn insert(&self, subscriber: &NewsletterSubscriber) -> anyhow::Result<()> {
        insert(subscriber, &self.subscribers);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Option<NewsletterSubscriber> {
        find_by(&self.subscribers, |subscriber| {
            subscriber.email.as_str() == email
        })
        .into_iter()
        .next()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<NewsletterSubscriber>> {
        let mut subscribers = find_by(&self.subscribers, |_| true);
        subscribers.sort_by_key(|subscriber| subscriber.created);
        Ok(subscribers)
    }

    async fn delete_by_email(&self, email: &str) -> Option<NewsletterSubscriber> {
        find_and_delete_by(&self.subscribers, |subscriber| {
            subscriber.email.as_str() == email
        })
        .into_iter()
        .next()
    }
}
