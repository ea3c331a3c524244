use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, trace, warn};

use crate::{internals::core::ports::Diagnosable, models::thresholds::Thresholds};

/// Time between two diagnose calls.
pub const POLL_PERIOD: Duration = Duration::from_millis(500);

/// Task: Runs periodically to diagnose the machine against `thresholds`
/// and log the outcome. Can be cancelled.
#[tracing::instrument(skip_all)]
pub async fn task_poll_diagnostics(
    token: CancellationToken,
    diagnosable: &impl Diagnosable,
    thresholds: Thresholds,
) {
    info!("Started with {}.", thresholds);
    loop {
        business_logic(diagnosable, thresholds).await;

        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            _ = tokio::time::sleep(POLL_PERIOD) => {}
        };
    }
}

/// Perform task business logic.
/// Diagnose once and report the outcome.
#[tracing::instrument(skip_all)]
async fn business_logic(
    diagnosable: &impl Diagnosable,
    thresholds: Thresholds,
) {
    trace!("Executing business logic.");
    let diagnosis = match diagnosable.diagnose(thresholds.cpu, thresholds.gpu, thresholds.memory)
    {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to diagnose. Error: {}", e);
            return;
        }
    };

    if diagnosis.is_healthy() {
        info!("Diagnosis: {}.", diagnosis);
    } else {
        warn!("Diagnosis: {}.", diagnosis);
    }
}
