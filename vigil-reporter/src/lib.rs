//! Periodically runs a health probe and writes its verdict into a
//! [`StatusHolder`], for status served through the background route.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use vigil_common::Severity;
use vigil_server::StatusHolder;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub code: Severity,
    pub message: String,
}

impl StatusReport {
    pub fn new(code: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Severity::Ok, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message)
    }
}

/// A health check. `check` runs on tokio's blocking pool, so it may do
/// blocking I/O without stalling the runtime.
pub trait Probe: Send + 'static {
    fn check(&mut self) -> StatusReport;
}

impl<F> Probe for F
where
    F: FnMut() -> StatusReport + Send + 'static,
{
    fn check(&mut self) -> StatusReport {
        self()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ReporterConfig {
    /// Time between probe runs. The first run happens immediately.
    pub interval: Duration,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Spawns the reporting loop. It runs until the returned handle is aborted,
/// or until the probe panics, which leaves the holder at Unknown.
pub fn spawn_reporter<P: Probe>(
    holder: StatusHolder,
    probe: P,
    config: ReporterConfig,
) -> JoinHandle<()> {
    tokio::spawn(report_loop(holder, probe, config))
}

async fn report_loop<P: Probe>(holder: StatusHolder, mut probe: P, config: ReporterConfig) {
    info!("Starting status reporter every {:?}", config.interval);
    let mut interval = tokio::time::interval(config.interval);
    let mut last = None;
    loop {
        interval.tick().await;
        let outcome = tokio::task::spawn_blocking(move || {
            let report = probe.check();
            (probe, report)
        })
        .await;
        let report = match outcome {
            Ok((returned, report)) => {
                probe = returned;
                report
            }
            Err(e) => {
                error!("Status probe failed, stopping reporter: {e}");
                holder.unknown(format!("probe failed: {e}"));
                return;
            }
        };
        if report.code != Severity::Ok && last != Some(report.code) {
            warn!("Probe reported {}: {}", report.code, report.message);
        }
        last = Some(report.code);
        holder.set(report.code, report.message);
    }
}
