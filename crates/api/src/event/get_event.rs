use crate::error::FestivoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use festivo_api_structs::get_event::{APIResponse, PathParams};
use festivo_domain::{Event, ID};
use festivo_infra::FestivoContext;

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                FestivoError::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))
    }
}
