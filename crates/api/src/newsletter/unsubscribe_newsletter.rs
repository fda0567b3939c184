use crate::error::FestivoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use festivo_api_structs::unsubscribe_newsletter::{APIResponse, RequestBody};
use festivo_domain::{EmailAddress, NewsletterSubscriber};
use festivo_infra::FestivoContext;

pub async fn unsubscribe_newsletter_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let usecase = UnsubscribeNewsletterUseCase {
        email: body.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|subscriber| {
            HttpResponse::Ok().json(APIResponse {
                message: format!("Unsubscribed {}", subscriber.email),
            })
        })
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct UnsubscribeNewsletterUseCase {
    pub email: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidEmail(String),
    NotSubscribed(String),
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEmail(email) => {
                FestivoError::BadClientData(format!("Invalid email address provided: {}", email))
            }
            UseCaseError::NotSubscribed(email) => {
                FestivoError::NotFound(format!("The email address {} is not subscribed.", email))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UnsubscribeNewsletterUseCase {
    type Response = NewsletterSubscriber;

    type Error = UseCaseError;

    const NAME: &'static str = "UnsubscribeNewsletter";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let email = EmailAddress::new(&self.email)
            .map_err(|_| UseCaseError::InvalidEmail(self.email.clone()))?;

        ctx.repos
            .subscribers
            .delete_by_email(email.as_str())
            .await
            .ok_or_else(|| UseCaseError::NotSubscribed(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn unsubscribing_an_unknown_address_gives_not_found() {
        let ctx = FestivoContext::create_inmemory();
        let usecase = UnsubscribeNewsletterUseCase {
            email: "nobody@example.com".into(),
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotSubscribed(_))));
    }
}
