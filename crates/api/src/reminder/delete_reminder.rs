use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::delete_reminder::{APIResponse, PathParams};
use festivo_domain::{Reminder, ID};
use festivo_infra::FestivoContext;

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => FestivoError::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .reminders
            .delete(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.reminder_id.clone()))
    }
}
