//! Job runner that flushes every reminder due today or earlier.
//! Meant to be run from a shell or a one-shot container, the serving
//! process never schedules dispatches on its own.

#[path = "../telemetry.rs"]
mod telemetry;

use festivo_api::run_reminder_dispatch;
use festivo_domain::DispatchMode;
use festivo_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("festivo_send_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let report = run_reminder_dispatch(&context, DispatchMode::TodayOrOverdue).await?;
    println!(
        "Sent {} of {} due reminders ({} failed)",
        report.sent, report.candidates, report.failed
    );

    Ok(())
}
