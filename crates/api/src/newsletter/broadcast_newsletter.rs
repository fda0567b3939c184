use crate::error::FestivoError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::broadcast_newsletter::{APIResponse, RequestBody};
use festivo_domain::NewsletterSubscriber;
use festivo_infra::{FestivoContext, Mail};
use futures::future::join_all;
use tracing::warn;

pub async fn broadcast_newsletter_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = BroadcastNewsletterUseCase {
        subject: body.0.subject,
        html: body.0.html,
    };

    execute(usecase, &ctx)
        .await
        .map(|(sent, failed)| HttpResponse::Ok().json(APIResponse::new(sent, failed)))
        .map_err(FestivoError::from)
}

/// Sends one mail per subscriber, with the same per recipient failure
/// isolation as the reminder dispatch.
#[derive(Debug)]
pub struct BroadcastNewsletterUseCase {
    pub subject: String,
    pub html: String,
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
impl UseCase for BroadcastNewsletterUseCase {
    type Response = (usize, usize);

    type Error = UseCaseError;

    const NAME: &'static str = "BroadcastNewsletter";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let subscribers = ctx
            .repos
            .subscribers
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let outcomes = join_all(
            subscribers
                .iter()
                .map(|subscriber| send_one(subscriber, &self.subject, &self.html, ctx)),
        )
        .await;

        let sent = outcomes.iter().filter(|delivered| **delivered).count();
        Ok((sent, outcomes.len() - sent))
    }
}

async fn send_one(
    subscriber: &NewsletterSubscriber,
    subject: &str,
    html: &str,
    ctx: &FestivoContext,
) -> bool {
    let mail = Mail {
        to: subscriber.email.to_string(),
        subject: subject.to_string(),
        html: html.to_string(),
    };
    match ctx.mailer.send(&mail).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Newsletter delivery to {} failed: {:?}", mail.to, e);
            false
        }
    }
}
