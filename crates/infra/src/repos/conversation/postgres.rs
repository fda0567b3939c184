use super::IConversationRepo;
use festivo_domain::{Conversation, ConversationStatus, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresConversationRepo {
    pool: PgPool,
}

impl PostgresConversationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ConversationRaw {
    conversation_uid: Uuid,
    status: String,
    last_activity: i64,
    closed_at: Option<i64>,
    closed_reason: Option<String>,
    created: i64,
    updated: i64,
}

impl From<ConversationRaw> for Conversation {
    fn from(e: ConversationRaw) -> Self {
        Self {
            id: e.conversation_uid.into(),
            status: e.status.parse::<ConversationStatus>().unwrap(),
            last_activity: e.last_activity,
            closed_at: e.closed_at,
            closed_reason: e.closed_reason,
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IConversationRepo for PostgresConversationRepo {
    async fn insert(&self, conversation: &Conversation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO conversations(
                conversation_uid,
                status,
                last_activity,
                closed_at,
                closed_reason,
                created,
                updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(conversation.id.inner_ref())
        .bind(conversation.status.as_str())
        .bind(conversation.last_activity)
        .bind(conversation.closed_at)
        .bind(&conversation.closed_reason)
        .bind(conversation.created)
        .bind(conversation.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert conversation: {:?}. DB returned error: {:?}",
                conversation, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, conversation: &Conversation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE conversations
            SET status = $2,
                last_activity = $3,
                closed_at = $4,
                closed_reason = $5,
                updated = $6
            WHERE conversation_uid = $1
            "#,
        )
        .bind(conversation.id.inner_ref())
        .bind(conversation.status.as_str())
        .bind(conversation.last_activity)
        .bind(conversation.closed_at)
        .bind(&conversation.closed_reason)
        .bind(conversation.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save conversation: {:?}. DB returned error: {:?}",
                conversation, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, conversation_id: &ID) -> Option<Conversation> {
        let res: Option<ConversationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM conversations
            WHERE conversation_uid = $1
            "#,
        )
        .bind(conversation_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find conversation with id: {:?} failed. DB returned error: {:?}",
                conversation_id, e
            );
            e
        })
        .ok()?;
        res.map(|conversation| conversation.into())
    }

    async fn find_all(&self) -> Vec<Conversation> {
        let conversations: Vec<ConversationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM conversations
            ORDER BY last_activity DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all conversations failed. DB returned error: {:?}", e);
            e
        })
        .unwrap_or_default();
        conversations
            .into_iter()
            .map(|conversation| conversation.into())
            .collect()
    }

    async fn find_inactive(&self, active_before: i64) -> anyhow::Result<Vec<Conversation>> {
        let conversations: Vec<ConversationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM conversations
            WHERE status = 'active' AND last_activity < $1
            "#,
        )
        .bind(active_before)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find conversations inactive since: {} failed. DB returned error: {:?}",
                active_before, e
            );
            e
        })?;
        Ok(conversations
            .into_iter()
            .map(|conversation| conversation.into())
            .collect())
    }

    async fn close_many(&self, ids: &[ID], closed_at: i64, reason: &str) -> anyhow::Result<()> {
        let ids = ids.iter().map(|id| *id.inner_ref()).collect::<Vec<_>>();
        sqlx::query(
            r#"
            UPDATE conversations
            SET status = 'closed',
                closed_at = $2,
                closed_reason = $3,
                updated = $2
            WHERE conversation_uid = ANY($1)
            "#,
        )
        .bind(&ids)
        .bind(closed_at)
        .bind(reason)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to close conversations with ids: {:?}. DB returned error: {:?}",
                ids, e
            );
            e
        })?;
        Ok(())
    }
}
