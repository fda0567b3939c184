use super::IEventRepo;
use festivo_domain::{Event, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    name: String,
    description: String,
    date: i64,
    image: Option<String>,
    category: String,
    created: i64,
    updated: i64,
}

impl From<EventRaw> for Event {
    fn from(e: EventRaw) -> Self {
        Self {
            id: e.event_uid.into(),
            name: e.name,
            description: e.description,
            date: e.date,
            image: e.image,
            category: e.category,
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events(
                event_uid,
                name,
                description,
                date,
                image,
                category,
                created,
                updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.image)
        .bind(&event.category)
        .bind(event.created)
        .bind(event.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert event: {:?}. DB returned error: {:?}",
                event, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, event: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET name = $2,
                description = $3,
                date = $4,
                image = $5,
                category = $6,
                updated = $7
            WHERE event_uid = $1
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.image)
        .bind(&event.category)
        .bind(event.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save event: {:?}. DB returned error: {:?}",
                event, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        let res: Option<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM events
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find event with id: {:?} failed. DB returned error: {:?}",
                event_id, e
            );
            e
        })
        .ok()?;
        res.map(|event| event.into())
    }

    async fn find_all(&self, category: Option<&str>) -> Vec<Event> {
        let events: Vec<EventRaw> = sqlx::query_as(
            r#"
            SELECT * FROM events
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY date
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find events with category: {:?} failed. DB returned error: {:?}",
                category, e
            );
            e
        })
        .unwrap_or_default();
        events.into_iter().map(|event| event.into()).collect()
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        let res: Option<EventRaw> = sqlx::query_as(
            r#"
            DELETE FROM events
            WHERE event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete event with id: {:?} failed. DB returned error: {:?}",
                event_id, e
            );
            e
        })
        .ok()?;
        res.map(|event| event.into())
    }
}
