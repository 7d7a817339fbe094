use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

const TIMER_DETAIL_LIMIT: usize = 300;

/// Timing record for one interactive session command. Events land on the
/// `studio.timing` target, which the logging setup routes to its own files.
#[derive(Debug)]
pub struct SessionTimer {
    command: String,
    detail: Option<String>,
    started_at: DateTime<Utc>,
    started_perf: Instant,
    status: String,
    completed: bool,
}

impl SessionTimer {
    fn new(command: &str, detail: Option<String>) -> Self {
        let detail = detail.map(|value| {
            let flattened = value.replace('\n', " ");
            if flattened.len() > TIMER_DETAIL_LIMIT {
                flattened.chars().take(TIMER_DETAIL_LIMIT).collect()
            } else {
                flattened
            }
        });

        SessionTimer {
            command: command.to_string(),
            detail,
            started_at: Utc::now(),
            started_perf: Instant::now(),
            status: "success".to_string(),
            completed: false,
        }
    }

    fn log_received(&self) {
        info!(
            target: "studio.timing",
            "event=command_received command={} received_at={} detail={:?}",
            self.command,
            self.started_at.to_rfc3339(),
            self.detail
        );
    }

    pub fn mark_status(&mut self, status: &str, detail: Option<String>) {
        self.status = status.to_string();
        if detail.is_some() {
            self.detail = detail;
        }
    }

    pub fn log_completed(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        let completed_at = Utc::now();
        let duration = self.started_perf.elapsed().as_secs_f64();
        info!(
            target: "studio.timing",
            "event=command_completed command={} started_at={} completed_at={} duration_s={:.3} status={} detail={}",
            self.command,
            self.started_at.to_rfc3339(),
            completed_at.to_rfc3339(),
            duration,
            self.status,
            self.detail.clone().unwrap_or_default()
        );
    }
}

pub fn start_session_timer(command: &str, detail: Option<String>) -> SessionTimer {
    let timer = SessionTimer::new(command, detail);
    timer.log_received();
    timer
}

pub fn complete_session_timer(timer: &mut SessionTimer, status: &str, detail: Option<String>) {
    timer.mark_status(status, detail);
    timer.log_completed();
}

pub async fn log_generation_timing<T, E, F, Fut>(
    provider: &str,
    model: &str,
    operation: &str,
    call: F,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let started_at = Utc::now();
    let started_perf = Instant::now();
    info!(
        target: "studio.timing",
        "event=generation_request provider={} model={} operation={} started_at={}",
        provider,
        model,
        operation,
        started_at.to_rfc3339()
    );

    let result = call().await;
    let status = if result.is_err() { "error" } else { "success" };

    let completed_at = Utc::now();
    let duration = started_perf.elapsed().as_secs_f64();
    info!(
        target: "studio.timing",
        "event=generation_response provider={} model={} operation={} completed_at={} duration_s={:.3} status={}",
        provider,
        model,
        operation,
        completed_at.to_rfc3339(),
        duration,
        status
    );

    result
}
