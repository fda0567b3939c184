use crate::error::FestivoError;
use crate::shared::auth::{protect_admin_route, protect_cron_route};
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use festivo_api_structs::dispatch_reminders::{APIResponse, QueryParams};
use festivo_domain::{year_of, BatchReport, DispatchMode, DispatchResult, Reminder, ReminderMail};
use festivo_infra::{FestivoContext, Mail};
use futures::future::join_all;
use tracing::{error, warn};

pub async fn dispatch_reminders_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<FestivoContext>,
) -> Result<HttpResponse, FestivoError> {
    let mode = query_params.0.mode;
    match mode {
        DispatchMode::ScheduledBatch => protect_cron_route(&http_req, &ctx)?,
        DispatchMode::ManualFlush | DispatchMode::TodayOrOverdue => {
            protect_admin_route(&http_req, &ctx)?
        }
    }

    let usecase = DispatchRemindersUseCase { mode };

    execute(usecase, &ctx)
        .await
        .map(|report| HttpResponse::Ok().json(APIResponse::new(report)))
        .map_err(FestivoError::from)
}

/// One sweep over the unsent reminder queue. Every due reminder is
/// resolved against its event, rendered and handed to the mailer,
/// independently of the others. A reminder is marked sent only after
/// the mailer accepted the mail, so anything that fails here stays
/// eligible for the next sweep (at least once delivery).
#[derive(Debug)]
pub struct DispatchRemindersUseCase {
    pub mode: DispatchMode,
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
impl UseCase for DispatchRemindersUseCase {
    type Response = BatchReport;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchReminders";

    async fn execute(&mut self, ctx: &FestivoContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let due = ctx
            .repos
            .reminders
            .find_unsent(self.mode.due_before(now))
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let candidates = due.len();
        let results = join_all(
            due.into_iter()
                .map(|reminder| dispatch_one(reminder, now, ctx)),
        )
        .await;

        let sent = results.iter().filter(|res| res.is_sent()).count();
        Ok(BatchReport {
            candidates,
            sent,
            failed: candidates - sent,
            results,
        })
    }
}

/// Sends a single reminder and flips its sent flag. Failures become
/// report entries instead of propagating, one stuck reminder must not
/// hold up the rest of the batch.
async fn dispatch_one(mut reminder: Reminder, now: i64, ctx: &FestivoContext) -> DispatchResult {
    // The event is the authoritative source for what we tell the
    // recipient. When it is gone the snapshot taken at creation is
    // still good enough to send from.
    let event = match &reminder.event_id {
        Some(event_id) => {
            let found = ctx.repos.events.find(event_id).await;
            if found.is_none() {
                warn!(
                    "Event: {} referenced by reminder: {} no longer exists. Sending from snapshot fields.",
                    event_id, reminder.id
                );
            }
            found
        }
        None => None,
    };

    let (event_name, event_date, description, image_url) = match event {
        Some(event) => (event.name, event.date, event.description, event.image),
        None => (
            reminder.event_name.clone(),
            reminder.event_date,
            String::new(),
            None,
        ),
    };

    let content = ReminderMail {
        recipient_name: reminder.user_id.clone(),
        event_name: event_name.clone(),
        event_date,
        description,
        image_url,
        year: year_of(now),
    };
    let mail = Mail {
        to: reminder.email.to_string(),
        subject: content.subject(),
        html: content.render_html(),
    };

    let receipt = match ctx.mailer.send(&mail).await {
        Ok(receipt) => receipt,
        Err(e) => {
            return DispatchResult::Failed {
                reminder_id: reminder.id,
                error: format!("Mail delivery failed: {}", e),
            }
        }
    };

    reminder.mark_sent(now);
    if let Err(e) = ctx.repos.reminders.save(&reminder).await {
        // The mail is already out but the sent flag did not stick, so
        // the next sweep will send a duplicate. The at least once
        // contract allows that.
        error!(
            "Unable to persist delivery state for reminder: {}: {:?}",
            reminder.id, e
        );
        return DispatchResult::Failed {
            reminder_id: reminder.id,
            error: "Sent but could not persist delivery state".into(),
        };
    }

    DispatchResult::Sent {
        reminder_id: reminder.id,
        email: reminder.email.to_string(),
        event_name,
        message_id: receipt.message_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festivo_domain::{EmailAddress, Event, ReminderKind, DAY_MILLIS, HOUR_MILLIS};
    use festivo_infra::{InMemoryMailer, ISys};
    use std::sync::Arc;

    const NOW: i64 = 1767276000000; // Thu Jan 01 2026 14:00:00 GMT+0000
    const MINUTE: i64 = 1000 * 60;

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            NOW
        }
    }

    fn test_ctx() -> (FestivoContext, Arc<InMemoryMailer>) {
        let mut ctx = FestivoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        let mailer = Arc::new(InMemoryMailer::new());
        ctx.mailer = mailer.clone();
        (ctx, mailer)
    }

    fn reminder(email: &str, remind_at: i64) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: email.split('@').next().unwrap().to_string(),
            event_id: None,
            event_name: "Winter Gala".into(),
            event_date: remind_at + HOUR_MILLIS,
            kind: ReminderKind::OneHour,
            remind_at,
            sent: false,
            sent_at: None,
            email: EmailAddress::new(email).unwrap(),
            phone: None,
            created: NOW - DAY_MILLIS,
            updated: NOW - DAY_MILLIS,
        }
    }

    async fn run(ctx: &FestivoContext, mode: DispatchMode) -> BatchReport {
        execute(DispatchRemindersUseCase { mode }, ctx)
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn scheduled_batch_only_selects_the_next_hour() {
        let (ctx, mailer) = test_ctx();
        let due_soon = reminder("amelie@example.com", NOW + 59 * MINUTE);
        let due_later = reminder("bruno@example.com", NOW + 61 * MINUTE);
        ctx.repos.reminders.insert(&due_soon).await.unwrap();
        ctx.repos.reminders.insert(&due_later).await.unwrap();

        let report = run(&ctx, DispatchMode::ScheduledBatch).await;
        assert_eq!(report.candidates, 1);
        assert_eq!(report.sent, 1);
        assert_eq!(report.failed, 0);

        let outbox = mailer.outbox();
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].to, "amelie@example.com");

        let stored = ctx.repos.reminders.find(&due_soon.id).await.unwrap();
        assert!(stored.sent);
        assert_eq!(stored.sent_at, Some(NOW));
        let stored = ctx.repos.reminders.find(&due_later.id).await.unwrap();
        assert!(!stored.sent);
    }

    #[actix_web::test]
    async fn manual_flush_takes_everything_unsent() {
        let (ctx, mailer) = test_ctx();
        let next_month = reminder("carla@example.com", NOW + 30 * DAY_MILLIS);
        ctx.repos.reminders.insert(&next_month).await.unwrap();

        let report = run(&ctx, DispatchMode::ScheduledBatch).await;
        assert_eq!(report.candidates, 0);

        let report = run(&ctx, DispatchMode::ManualFlush).await;
        assert_eq!(report.sent, 1);
        assert_eq!(mailer.outbox().len(), 1);
    }

    #[actix_web::test]
    async fn a_second_sweep_sends_nothing_new() {
        let (ctx, mailer) = test_ctx();
        let due = reminder("dora@example.com", NOW - MINUTE);
        ctx.repos.reminders.insert(&due).await.unwrap();

        let report = run(&ctx, DispatchMode::ManualFlush).await;
        assert_eq!(report.sent, 1);

        let report = run(&ctx, DispatchMode::ManualFlush).await;
        assert_eq!(report.candidates, 0);
        assert_eq!(report.sent, 0);
        assert_eq!(mailer.outbox().len(), 1);
    }

    #[actix_web::test]
    async fn deleted_event_falls_back_to_snapshot_fields() {
        let (ctx, mailer) = test_ctx();
        let event = Event::new("Spring Banquet", NOW + HOUR_MILLIS, NOW - DAY_MILLIS);
        ctx.repos.events.insert(&event).await.unwrap();

        let mut due = reminder("elin@example.com", NOW - MINUTE);
        due.event_id = Some(event.id.clone());
        due.event_name = "Spring Banquet".into();
        ctx.repos.reminders.insert(&due).await.unwrap();

        ctx.repos.events.delete(&event.id).await.unwrap();

        let report = run(&ctx, DispatchMode::ManualFlush).await;
        assert_eq!(report.sent, 1);
        assert!(matches!(
            &report.results[0],
            DispatchResult::Sent { event_name, .. } if event_name == "Spring Banquet"
        ));
        assert!(mailer.outbox()[0].subject.contains("Spring Banquet"));

        let stored = ctx.repos.reminders.find(&due.id).await.unwrap();
        assert!(stored.sent);
    }

    #[actix_web::test]
    async fn one_rejected_recipient_does_not_stop_the_batch() {
        let (mut ctx, mailer) = test_ctx();
        mailer.fail_for("flora@example.com");

        for email in ["erik@example.com", "flora@example.com", "greta@example.com"] {
            let due = reminder(email, NOW - MINUTE);
            ctx.repos.reminders.insert(&due).await.unwrap();
        }

        let report = run(&ctx, DispatchMode::ManualFlush).await;
        assert_eq!(report.candidates, 3);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failed, 1);

        let unsent = ctx.repos.reminders.find_unsent(None).await.unwrap();
        assert_eq!(unsent.len(), 1);
        assert_eq!(unsent[0].email.as_str(), "flora@example.com");

        // Once the provider recovers the failed reminder goes out too
        let retry_mailer = Arc::new(InMemoryMailer::new());
        ctx.mailer = retry_mailer.clone();
        let report = run(&ctx, DispatchMode::ManualFlush).await;
        assert_eq!(report.sent, 1);
        assert_eq!(retry_mailer.outbox().len(), 1);
        assert_eq!(retry_mailer.outbox()[0].to, "flora@example.com");
    }

    #[actix_web::test]
    async fn today_or_overdue_stops_at_midnight() {
        let (ctx, mailer) = test_ctx();
        // NOW is 14:00 UTC, so the end of the day is ten hours away
        let tonight = reminder("hugo@example.com", NOW + 9 * HOUR_MILLIS);
        let tomorrow = reminder("ines@example.com", NOW + 11 * HOUR_MILLIS);
        let overdue = reminder("jonas@example.com", NOW - 3 * DAY_MILLIS);
        for due in [&tonight, &tomorrow, &overdue] {
            ctx.repos.reminders.insert(due).await.unwrap();
        }

        let report = run(&ctx, DispatchMode::TodayOrOverdue).await;
        assert_eq!(report.candidates, 2);
        assert_eq!(report.sent, 2);

        let recipients: Vec<_> = mailer.outbox().into_iter().map(|mail| mail.to).collect();
        assert!(recipients.contains(&"hugo@example.com".to_string()));
        assert!(recipients.contains(&"jonas@example.com".to_string()));
        assert!(!recipients.contains(&"ines@example.com".to_string()));
    }
}
