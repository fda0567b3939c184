use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::create_event::{APIResponse, RequestBody};
use festivo_domain::Event;
use festivo_infra::FestivoContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = CreateEventUseCase {
        name: body.0.name,
        description: body.0.description,
        date: body.0.date,
        image: body.0.image,
        category: body.0.category,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub name: String,
    pub description: Option<String>,
    pub date: i64,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                FestivoError::BadClientData("Event name cannot be empty".into())
            }
            UseCaseError::StorageError => FestivoError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::InvalidName);
        }

        let now = ctx.sys.get_timestamp_millis();
        let mut event = Event::new(name, self.date, now);
        event.description = self.description.take().unwrap_or_default();
        event.image = self.image.take();
        event.category = self.category.take().unwrap_or_default();

        ctx.repos
            .events
            .insert(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn rejects_blank_event_name() {
        let ctx = FestivoContext::create_inmemory();
        let usecase = CreateEventUseCase {
            name: "   ".into(),
            description: None,
            date: 1767276000000,
            image: None,
            category: None,
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidName)));
    }

    #[actix_web::test]
    async fn creates_and_stores_event() {
        let ctx = FestivoContext::create_inmemory();
        let usecase = CreateEventUseCase {
            name: "Harvest Festival".into(),
            description: Some("An evening among the vines".into()),
            date: 1767276000000,
            image: None,
            category: Some("festival".into()),
        };

        let event = execute(usecase, &ctx).await.unwrap();
        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert_eq!(stored.name, "Harvest Festival");
        assert_eq!(stored.category, "festival");
    }
}
