use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::update_event::{APIResponse, PathParams, RequestBody};
use festivo_domain::{Event, ID};
use festivo_infra::FestivoContext;

pub async fn update_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = UpdateEventUseCase {
        event_id: path_params.event_id.clone(),
        name: body.0.name,
        description: body.0.description,
        date: body.0.date,
        image: body.0.image,
        category: body.0.category,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(FestivoError::from)
}

/// Fields left out of the request body keep their stored value.
#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<i64>,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                FestivoError::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::InvalidName => {
                FestivoError::BadClientData("Event name cannot be empty".into())
            }
            UseCaseError::StorageError => FestivoError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let mut event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => return Err(UseCaseError::NotFound(self.event_id.clone())),
        };

        if let Some(name) = self.name.take() {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(UseCaseError::InvalidName);
            }
            event.name = name;
        }
        if let Some(description) = self.description.take() {
            event.description = description;
        }
        if let Some(date) = self.date.take() {
            event.date = date;
        }
        if let Some(image) = self.image.take() {
            event.image = Some(image);
        }
        if let Some(category) = self.category.take() {
            event.category = category;
        }
        event.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .events
            .save(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}
