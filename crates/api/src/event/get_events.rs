use crate::error::FestivoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use festivo_api_structs::get_events::{APIResponse, QueryParams};
use festivo_domain::Event;
use festivo_infra::FestivoContext;

pub async fn get_events_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let usecase = GetEventsUseCase {
        category: query_params.0.category,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase {
    pub category: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.events.find_all(self.category.as_deref()).await)
    }
}
