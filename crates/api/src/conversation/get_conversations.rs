use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::get_conversations::APIResponse;
use festivo_domain::Conversation;
use festivo_infra::FestivoContext;

pub async fn get_conversations_controller(
    http_req: HttpRequest,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = GetConversationsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|conversations| HttpResponse::Ok().json(APIResponse::new(conversations)))
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct GetConversationsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetConversationsUseCase {
    type Response = Vec<Conversation>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetConversations";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.conversations.find_all().await)
    }
}
