use crate::error::FestivoError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use festivo_api_structs::create_reminder::{APIResponse, RequestBody};
use festivo_domain::{EmailAddress, Reminder, ReminderKind, ID};
use festivo_infra::FestivoContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let usecase = CreateReminderUseCase {
        email: body.0.email,
        phone: body.0.phone,
        event_id: body.0.event_id,
        event_name: body.0.event_name,
        event_date: body.0.event_date,
        kind: body.0.reminder_type,
        remind_at: body.0.remind_at,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(FestivoError::from)
}

/// Public form handler behind the "remind me" button on the site.
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub email: String,
    pub phone: Option<String>,
    pub event_id: Option<ID>,
    pub event_name: Option<String>,
    pub event_date: Option<i64>,
    pub kind: ReminderKind,
    pub remind_at: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidEmail(String),
    EventNotFound(ID),
    MissingEventName,
    MissingEventDate,
    MissingRemindAt,
    StorageError,
}

impl From<UseCaseError> for FestivoError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEmail(email) => {
                FestivoError::BadClientData(format!("Invalid email address provided: {}", email))
            }
            UseCaseError::EventNotFound(event_id) => {
                FestivoError::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::MissingEventName => FestivoError::BadClientData(
                "An event name is required when no event id is given".into(),
            ),
            UseCaseError::MissingEventDate => FestivoError::BadClientData(
                "An event date is required to compute the remind time".into(),
            ),
            UseCaseError::MissingRemindAt => FestivoError::BadClientData(
                "A remindAt timestamp is required for custom reminders".into(),
            ),
            UseCaseError::StorageError => FestivoError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let email = EmailAddress::new(&self.email)
            .map_err(|_| UseCaseError::InvalidEmail(self.email.clone()))?;

        // The event fields are snapshotted at creation time so that
        // dispatch still works if the event is edited or deleted later.
        let (event_name, event_date) = match &self.event_id {
            Some(event_id) => {
                let event = ctx
                    .repos
                    .events
                    .find(event_id)
                    .await
                    .ok_or_else(|| UseCaseError::EventNotFound(event_id.clone()))?;
                (event.name, event.date)
            }
            None => {
                let name = match self.event_name.take() {
                    Some(name) if !name.trim().is_empty() => name,
                    _ => return Err(UseCaseError::MissingEventName),
                };
                let date = match self.event_date {
                    Some(date) => date,
                    // A custom reminder without an event date can still
                    // snapshot its own remind time
                    None => match (self.kind.offset_millis(), self.remind_at) {
                        (None, Some(remind_at)) => remind_at,
                        _ => return Err(UseCaseError::MissingEventDate),
                    },
                };
                (name, date)
            }
        };

        let remind_at = match self.kind.offset_millis() {
            Some(offset) => event_date - offset,
            None => self.remind_at.ok_or(UseCaseError::MissingRemindAt)?,
        };

        let now = ctx.sys.get_timestamp_millis();
        let reminder = Reminder {
            id: Default::default(),
            user_id: email.local_part().to_string(),
            event_id: self.event_id.clone(),
            event_name,
            event_date,
            kind: self.kind,
            remind_at,
            sent: false,
            sent_at: None,
            email,
            phone: self.phone.take(),
            created: now,
            updated: now,
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festivo_domain::{Event, DAY_MILLIS};

    const EVENT_DATE: i64 = 1772234700000; // Fri Feb 27 2026 23:25:00 GMT+0000

    fn base_usecase() -> CreateReminderUseCase {
        CreateReminderUseCase {
            email: "anna.svensson@example.com".into(),
            phone: None,
            event_id: None,
            event_name: Some("Vineyard Wedding".into()),
            event_date: Some(EVENT_DATE),
            kind: ReminderKind::OneWeek,
            remind_at: None,
        }
    }

    #[actix_web::test]
    async fn computes_remind_at_from_the_kind_offset() {
        let ctx = FestivoContext::create_inmemory();

        let reminder = execute(base_usecase(), &ctx).await.unwrap();
        assert_eq!(reminder.remind_at, EVENT_DATE - 7 * DAY_MILLIS);
        assert_eq!(reminder.user_id, "anna.svensson");
        assert!(!reminder.sent);
    }

    #[actix_web::test]
    async fn snapshots_name_and_date_from_the_referenced_event() {
        let ctx = FestivoContext::create_inmemory();
        let event = Event::new("Midsummer Party", EVENT_DATE, EVENT_DATE - DAY_MILLIS);
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = base_usecase();
        usecase.event_id = Some(event.id.clone());
        usecase.event_name = None;
        usecase.event_date = None;

        let reminder = execute(usecase, &ctx).await.unwrap();
        assert_eq!(reminder.event_name, "Midsummer Party");
        assert_eq!(reminder.event_date, EVENT_DATE);
        assert_eq!(reminder.event_id, Some(event.id));
    }

    #[actix_web::test]
    async fn custom_reminders_require_a_remind_at() {
        let ctx = FestivoContext::create_inmemory();
        let mut usecase = base_usecase();
        usecase.kind = ReminderKind::Custom;

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::MissingRemindAt)));
    }

    #[actix_web::test]
    async fn non_custom_reminders_require_an_event_date() {
        let ctx = FestivoContext::create_inmemory();
        let mut usecase = base_usecase();
        usecase.event_date = None;

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::MissingEventDate)));
    }

    #[actix_web::test]
    async fn rejects_invalid_email_addresses() {
        let ctx = FestivoContext::create_inmemory();
        let mut usecase = base_usecase();
        usecase.email = "not-an-email".into();

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidEmail(_))));
    }

    #[actix_web::test]
    async fn missing_event_reference_gives_not_found() {
        let ctx = FestivoContext::create_inmemory();
        let mut usecase = base_usecase();
        usecase.event_id = Some(Default::default());

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::EventNotFound(_))));
    }
}
