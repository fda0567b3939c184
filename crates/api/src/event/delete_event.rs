use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::delete_event::{APIResponse, PathParams};
use festivo_domain::{Event, ID};
use festivo_infra::FestivoContext;

pub async fn delete_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(FestivoError::from)
}

/// Reminders pointing at the deleted event are left untouched, they
/// dispatch from their own snapshot fields afterwards.
#[derive(Debug)]
pub struct DeleteEventUseCase {
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
impl UseCase for DeleteEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .delete(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))
    }
}
