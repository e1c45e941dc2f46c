//! Periodic session sweep.
//!
//! Lives outside the bot core: it only asks the supervisor to clear sessions
//! on a fixed interval and logs the outcome.

use crate::actors::supervisor::SupervisorHandle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// Spawns the sweep loop. The first sweep happens one full `period` after start.
///
/// The task ends on its own once the supervisor is gone. A sweep that times
/// out behind a slow delivery is logged and retried on the next tick.
pub fn spawn_session_sweeper(handle: SupervisorHandle, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match handle.clear_sessions().await {
                Ok(dropped) => info!(dropped, "Session sweep finished"),
                Err(e) if e.is_supervisor_gone() => {
                    warn!("Session sweep stopped: {}", e);
                    break;
                }
                Err(e) => warn!("Session sweep skipped: {}", e),
            }
        }
    })
}
