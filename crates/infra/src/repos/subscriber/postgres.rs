use super::ISubscriberRepo;
use festivo_domain::{EmailAddress, NewsletterSubscriber};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresSubscriberRepo {
    pool: PgPool,
}

impl PostgresSubscriberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRaw {
    subscriber_uid: Uuid,
    email: String,
    name: Option<String>,
    created: i64,
}

impl From<SubscriberRaw> for NewsletterSubscriber {
    fn from(e: SubscriberRaw) -> Self {
        Self {
            id: e.subscriber_uid.into(),
            email: EmailAddress::new(&e.email).unwrap(),
            name: e.name,
            created: e.created,
        }
    }
}

#[async_trait::async_trait]
impl ISubscriberRepo for PostgresSubscriberRepo {
    async fn insert(&self, subscriber: &NewsletterSubscriber) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO newsletter_subscribers(
                subscriber_uid,
                email,
                name,
                created
            )
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(subscriber.id.inner_ref())
        .bind(subscriber.email.as_str())
        .bind(&subscriber.name)
        .bind(subscriber.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert newsletter subscriber: {:?}. DB returned error: {:?}",
                subscriber, e
            );
            e
        })?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Option<NewsletterSubscriber> {
        let res: Option<SubscriberRaw> = sqlx::query_as(
            r#"
            SELECT * FROM newsletter_subscribers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find newsletter subscriber with email: {:?} failed. DB returned error: {:?}",
                email, e
            );
            e
        })
        .ok()?;
        res.map(|subscriber| subscriber.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<NewsletterSubscriber>> {
        let subscribers: Vec<SubscriberRaw> = sqlx::query_as(
            r#"
            SELECT * FROM newsletter_subscribers
            ORDER BY created
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find all newsletter subscribers failed. DB returned error: {:?}",
                e
            );
            e
        })?;
        Ok(subscribers
            .into_iter()
            .map(|subscriber| subscriber.into())
            .collect())
    }

    async fn delete_by_email(&self, email: &str) -> Option<NewsletterSubscriber> {
        let res: Option<SubscriberRaw> = sqlx::query_as(
            r#"
            DELETE FROM newsletter_subscribers
            WHERE email = $1
            RETURNING *
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete newsletter subscriber with email: {:?} failed. DB returned error: {:?}",
                email, e
            );
            e
        })
        .ok()?;
        res.map(|subscriber| subscriber.into())
    }
}
