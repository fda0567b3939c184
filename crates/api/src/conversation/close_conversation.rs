use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::close_conversation::{APIResponse, PathParams, RequestBody};
use festivo_domain::{Conversation, ID};
use festivo_infra::FestivoContext;

const DEFAULT_CLOSE_REASON: &str = "Closed by operator";

pub async fn close_conversation_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = CloseConversationUseCase {
        conversation_id: path_params.conversation_id.clone(),
        reason: body.0.reason,
    };

    execute(usecase, &ctx)
        .await
        .map(|conversation| HttpResponse::Ok().json(APIResponse::new(conversation)))
        .map_err(FestivoError::from)
}

/// Manual close by an operator, allowed for any active conversation no
/// matter how recent its last activity is.
#[derive(Debug)]
pub struct CloseConversationUseCase {
    pub conversation_id: ID,
    pub reason: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    AlreadyClosed(ID),
    StorageError,
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(conversation_id) => FestivoError::NotFound(format!(
                "The conversation with id: {}, was not found.",
                conversation_id
            )),
            UseCaseError::AlreadyClosed(conversation_id) => FestivoError::Conflict(format!(
                "The conversation with id: {} is already closed.",
                conversation_id
            )),
            UseCaseError::StorageError => FestivoError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CloseConversationUseCase {
    type Response = Conversation;

    type Error = UseCaseError;

    const NAME: &'static str = "CloseConversation";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let mut conversation = ctx
            .repos
            .conversations
            .find(&self.conversation_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.conversation_id.clone()))?;

        if !conversation.is_active() {
            return Err(UseCaseError::AlreadyClosed(self.conversation_id.clone()));
        }

        let reason = self
            .reason
            .take()
            .unwrap_or_else(|| DEFAULT_CLOSE_REASON.to_string());
        conversation.close(&reason, ctx.sys.get_timestamp_millis());

        ctx.repos
            .conversations
            .save(&conversation)
            .await
            .map(|_| conversation)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festivo_domain::ConversationStatus;

    #[actix_web::test]
    async fn closes_an_active_conversation_with_the_given_reason() {
        let ctx = FestivoContext::create_inmemory();
        let conversation = Conversation::new(1767276000000);
        ctx.repos.conversations.insert(&conversation).await.unwrap();

        let usecase = CloseConversationUseCase {
            conversation_id: conversation.id.clone(),
            reason: Some("Resolved over the phone".into()),
        };

        let closed = execute(usecase, &ctx).await.unwrap();
        assert_eq!(closed.status, ConversationStatus::Closed);
        assert_eq!(closed.closed_reason.as_deref(), Some("Resolved over the phone"));
    }

    #[actix_web::test]
    async fn falls_back_to_the_default_reason() {
        let ctx = FestivoContext::create_inmemory();
        let conversation = Conversation::new(1767276000000);
        ctx.repos.conversations.insert(&conversation).await.unwrap();

        let usecase = CloseConversationUseCase {
            conversation_id: conversation.id.clone(),
            reason: None,
        };

        let closed = execute(usecase, &ctx).await.unwrap();
        assert_eq!(closed.closed_reason.as_deref(), Some(DEFAULT_CLOSE_REASON));
    }

    #[actix_web::test]
    async fn closing_twice_gives_a_conflict() {
        let ctx = FestivoContext::create_inmemory();
        let conversation = Conversation::new(1767276000000);
        ctx.repos.conversations.insert(&conversation).await.unwrap();

        let usecase = CloseConversationUseCase {
            conversation_id: conversation.id.clone(),
            reason: None,
        };
        execute(usecase, &ctx).await.unwrap();

        let usecase = CloseConversationUseCase {
            conversation_id: conversation.id.clone(),
            reason: None,
        };
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::AlreadyClosed(_))));
    }
}
