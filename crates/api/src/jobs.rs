use crate::reminder::dispatch_reminders::DispatchRemindersUseCase;
use crate::shared::usecase::execute;
use festivo_domain::{BatchReport, DispatchMode};
use festivo_infra::FestivoContext;

/// One-shot dispatch run for the job runner binary. The HTTP trigger
/// paths go through the dispatch controller instead.
pub async fn run_reminder_dispatch(
    ctx: &FestivoContext,
    mode: DispatchMode,
) -> anyhow::Result<BatchReport> {
    execute(DispatchRemindersUseCase { mode }, ctx)
        .await
        .map_err(|e| anyhow::anyhow!("Reminder dispatch failed: {:?}", e))
}
