use super::IReminderRepo;
use festivo_domain::{EmailAddress, Reminder, ReminderKind, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    user_id: String,
    event_uid: Option<Uuid>,
    event_name: String,
    event_date: i64,
    kind: String,
    remind_at: i64,
    sent: bool,
    sent_at: Option<i64>,
    email: String,
    phone: Option<String>,
    created: i64,
    updated: i64,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Self {
            id: e.reminder_uid.into(),
            user_id: e.user_id,
            event_id: e.event_uid.map(|uid| uid.into()),
            event_name: e.event_name,
            event_date: e.event_date,
            kind: e.kind.parse::<ReminderKind>().unwrap(),
            remind_at: e.remind_at,
            sent: e.sent,
            sent_at: e.sent_at,
            email: EmailAddress::new(&e.email).unwrap(),
            phone: e.phone,
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders(
                reminder_uid,
                user_id,
                event_uid,
                event_name,
                event_date,
                kind,
                remind_at,
                sent,
                sent_at,
                email,
                phone,
                created,
                updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.user_id)
        .bind(reminder.event_id.as_ref().map(|id| *id.inner_ref()))
        .bind(&reminder.event_name)
        .bind(reminder.event_date)
        .bind(reminder.kind.as_str())
        .bind(reminder.remind_at)
        .bind(reminder.sent)
        .bind(reminder.sent_at)
        .bind(reminder.email.as_str())
        .bind(&reminder.phone)
        .bind(reminder.created)
        .bind(reminder.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET user_id = $2,
                event_uid = $3,
                event_name = $4,
                event_date = $5,
                kind = $6,
                remind_at = $7,
                sent = $8,
                sent_at = $9,
                email = $10,
                phone = $11,
                updated = $12
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.user_id)
        .bind(reminder.event_id.as_ref().map(|id| *id.inner_ref()))
        .bind(&reminder.event_name)
        .bind(reminder.event_date)
        .bind(reminder.kind.as_str())
        .bind(reminder.remind_at)
        .bind(reminder.sent)
        .bind(reminder.sent_at)
        .bind(reminder.email.as_str())
        .bind(&reminder.phone)
        .bind(reminder.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save reminder: {:?}. DB returned error: {:?}",
                reminder, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|reminder| reminder.into())
    }

    async fn find_all(&self) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            ORDER BY remind_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all reminders failed. DB returned error: {:?}", e);
            e
        })
        .unwrap_or_default();
        reminders.into_iter().map(|reminder| reminder.into()).collect()
    }

    async fn find_unsent(&self, due_before: Option<i64>) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM reminders
            WHERE sent = FALSE AND ($1::bigint IS NULL OR remind_at <= $1)
            ORDER BY remind_at
            "#,
        )
        .bind(due_before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find unsent reminders due before: {:?} failed. DB returned error: {:?}",
                due_before, e
            );
            e
        })?;
        Ok(reminders.into_iter().map(|reminder| reminder.into()).collect())
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let res: Option<ReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM reminders
            WHERE reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete reminder with id: {:?} failed. DB returned error: {:?}",
                reminder_id, e
            );
            e
        })
        .ok()?;
        res.map(|reminder| reminder.into())
    }
}
