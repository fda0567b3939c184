use crate::error::FestivoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use festivo_api_structs::auto_close_conversations::APIResponse;
use festivo_domain::{AUTO_CLOSE_REASON, ID};
use festivo_infra::FestivoContext;

pub async fn auto_close_conversations_controller(
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let usecase = AutoCloseConversationsUseCase {
        inactivity_millis: ctx.config.conversation_inactivity_millis,
    };

    execute(usecase, &ctx)
        .await
        .map(|conversation_ids| HttpResponse::Ok().json(APIResponse::new(conversation_ids)))
        .map_err(FestivoError::from)
}

/// Sweeps every conversation whose last activity is older than the
/// inactivity window and closes them in one update. The sweep is
/// stateless, a failed run is simply redone by the next invocation.
#[derive(Debug)]
pub struct AutoCloseConversationsUseCase {
    pub inactivity_millis: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => FestivoError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AutoCloseConversationsUseCase {
    type Response = Vec<ID>;

    type Error = UseCaseError;

    const NAME: &'static str = "AutoCloseConversations";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let inactive = ctx
            .repos
            .conversations
            .find_inactive(now - self.inactivity_millis)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let conversation_ids: Vec<ID> = inactive.iter().map(|c| c.id.clone()).collect();
        if conversation_ids.is_empty() {
            return Ok(conversation_ids);
        }

        ctx.repos
            .conversations
            .close_many(&conversation_ids, now, AUTO_CLOSE_REASON)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(conversation_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festivo_domain::{Conversation, ConversationStatus};
    use festivo_infra::ISys;
    use std::sync::Arc;

    const NOW: i64 = 1767276000000; // Thu Jan 01 2026 14:00:00 GMT+0000
    const MINUTE: i64 = 1000 * 60;

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            NOW
        }
    }

    fn test_ctx() -> FestivoContext {
        let mut ctx = FestivoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx
    }

    #[actix_web::test]
    async fn closes_only_conversations_past_the_inactivity_window() {
        let ctx = test_ctx();
        let stale = Conversation::new(NOW - 61 * MINUTE);
        let fresh = Conversation::new(NOW - 30 * MINUTE);
        ctx.repos.conversations.insert(&stale).await.unwrap();
        ctx.repos.conversations.insert(&fresh).await.unwrap();

        let usecase = AutoCloseConversationsUseCase {
            inactivity_millis: 60 * MINUTE,
        };
        let closed = execute(usecase, &ctx).await.unwrap();
        assert_eq!(closed, vec![stale.id.clone()]);

        let stale = ctx.repos.conversations.find(&stale.id).await.unwrap();
        assert_eq!(stale.status, ConversationStatus::Closed);
        assert_eq!(
            stale.closed_reason.as_deref(),
            Some("Auto-closed due to inactivity")
        );
        assert_eq!(stale.closed_at, Some(NOW));

        let fresh = ctx.repos.conversations.find(&fresh.id).await.unwrap();
        assert_eq!(fresh.status, ConversationStatus::Active);
    }

    #[actix_web::test]
    async fn an_empty_sweep_is_not_an_error() {
        let ctx = test_ctx();

        let usecase = AutoCloseConversationsUseCase {
            inactivity_millis: 60 * MINUTE,
        };
        let closed = execute(usecase, &ctx).await.unwrap();
        assert!(closed.is_empty());
    }

    #[actix_web::test]
    async fn never_retouches_conversations_that_are_already_closed() {
        let ctx = test_ctx();
        let mut conversation = Conversation::new(NOW - 180 * MINUTE);
        conversation.close("Closed by operator", NOW - 120 * MINUTE);
        ctx.repos.conversations.insert(&conversation).await.unwrap();

        let usecase = AutoCloseConversationsUseCase {
            inactivity_millis: 60 * MINUTE,
        };
        let swept = execute(usecase, &ctx).await.unwrap();
        assert!(swept.is_empty());

        let stored = ctx.repos.conversations.find(&conversation.id).await.unwrap();
        assert_eq!(stored.closed_reason.as_deref(), Some("Closed by operator"));
    }
}
