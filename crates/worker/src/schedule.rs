//! Cron-driven tick loop for the export task.
//!
//! The loop sleeps until the next fire time of the schedule, then runs one
//! tick to completion. Cancellation is only observed while sleeping, so a
//! tick that has started is never interrupted.

use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use cron::Schedule;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::task::ExportTask;

/// Accept classic five-field cron expressions by prepending a seconds
/// field. Six- and seven-field expressions pass through unchanged.
pub fn normalize_expression(expr: &str) -> String {
    let expr = expr.trim();
    if expr.split_whitespace().count() == 5 {
        format!("0 {expr}")
    } else {
        expr.to_string()
    }
}

/// Parse a cadence string into a [`Schedule`].
pub fn parse_schedule(expr: &str) -> Result<Schedule, cron::error::Error> {
    Schedule::from_str(&normalize_expression(expr))
}

/// Run `task` on every fire time of `schedule` until `cancel` is triggered.
pub async fn run(schedule: Schedule, task: ExportTask, cancel: CancellationToken) {
    tracing::info!(
        output_dir = %task.output_dir().display(),
        "Export scheduler started"
    );

    loop {
        let Some(next) = schedule.upcoming(Utc).next() else {
            tracing::warn!("Export schedule has no upcoming fire time, stopping");
            break;
        };
        let wait = (next - Utc::now()).to_std().unwrap_or(Duration::ZERO);
        tracing::debug!(next = %next, "Export: waiting for next tick");

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Export scheduler stopping");
                break;
            }
            _ = tokio::time::sleep(wait) => {}
        }

        task.run_once().await;
    }
}

/// Wait for a spawned [`run`] loop to end, logging a panic or abort.
pub async fn join(handle: JoinHandle<()>) -> Result<(), JoinError> {
    let result = handle.await;
    if let Err(e) = &result {
        tracing::error!(error = %e, panicked = e.is_panic(), "Export scheduler task failed");
    }
    result
}
