use crate::error::FestivoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use festivo_api_structs::subscribe_newsletter::{APIResponse, RequestBody};
use festivo_domain::{EmailAddress, NewsletterSubscriber};
use festivo_infra::FestivoContext;

pub async fn subscribe_newsletter_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let usecase = SubscribeNewsletterUseCase {
        email: body.0.email,
        name: body.0.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|subscriber| HttpResponse::Created().json(APIResponse::new(subscriber)))
        .map_err(FestivoError::from)
}

#[derive(Debug)]
pub struct SubscribeNewsletterUseCase {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidEmail(String),
    AlreadySubscribed(String),
    StorageError,
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEmail(email) => {
                FestivoError::BadClientData(format!("Invalid email address provided: {}", email))
            }
            UseCaseError::AlreadySubscribed(email) => FestivoError::Conflict(format!(
                "The email address {} is already subscribed.",
                email
            )),
            UseCaseError::StorageError => FestivoError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubscribeNewsletterUseCase {
    type Response = NewsletterSubscriber;

    type Error = UseCaseError;

    const NAME: &'static str = "SubscribeNewsletter";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let email = EmailAddress::new(&self.email)
            .map_err(|_| UseCaseError::InvalidEmail(self.email.clone()))?;

        if ctx
            .repos
            .subscribers
            .find_by_email(email.as_str())
            .await
            .is_some()
        {
            return Err(UseCaseError::AlreadySubscribed(email.to_string()));
        }

        let mut subscriber = NewsletterSubscriber::new(email, ctx.sys.get_timestamp_millis());
        subscriber.name = self.name.take();

        ctx.repos
            .subscribers
            .insert(&subscriber)
            .await
            .map(|_| subscriber)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscribe(email: &str) -> SubscribeNewsletterUseCase {
        SubscribeNewsletterUseCase {
            email: email.into(),
            name: None,
        }
    }

    #[actix_web::test]
    async fn normalizes_and_stores_the_address() {
        let ctx = FestivoContext::create_inmemory();

        let subscriber = execute(subscribe("  Karin@Example.COM "), &ctx).await.unwrap();
        assert_eq!(subscriber.email.as_str(), "karin@example.com");
    }

    #[actix_web::test]
    async fn a_duplicate_subscription_is_a_conflict() {
        let ctx = FestivoContext::create_inmemory();
        execute(subscribe("karin@example.com"), &ctx).await.unwrap();

        let res = execute(subscribe("karin@example.com"), &ctx).await;
        assert!(matches!(res, Err(UseCaseError::AlreadySubscribed(_))));
    }
}
