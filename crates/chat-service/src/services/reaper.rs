//! Presence reaper
//!
//! A recurring task that turns silence into departure notices. Each cycle
//! selects participants whose heartbeat is older than the staleness
//! threshold, writes one `status` departure message per participant, and
//! only then removes them. A failed message write aborts the cycle before
//! anything is removed; the next tick retries from current state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, instrument};

use chat_core::entities::{format_message_time, staleness_cutoff, Message};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Outcome of one reap cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReapReport {
    /// Participants a departure notice was written for
    pub departed: Vec<String>,
    /// Participants actually removed
    pub removed: u64,
}

impl ReapReport {
    pub fn is_empty(&self) -> bool {
        self.departed.is_empty()
    }
}

/// Presence reaper
pub struct PresenceReaper {
    ctx: Arc<ServiceContext>,
}

impl PresenceReaper {
    /// Create a new PresenceReaper
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Run a single cycle against the context's clock
    #[instrument(skip(self))]
    pub async fn reap_once(&self) -> ServiceResult<ReapReport> {
        let now = self.ctx.clock().now();
        let cutoff = staleness_cutoff(now, self.ctx.presence().stale_after);

        let stale = self.ctx.participant_repo().find_stale(cutoff).await?;
        if stale.is_empty() {
            return Ok(ReapReport::default());
        }

        let time = format_message_time(now);
        let departures: Vec<Message> = stale
            .iter()
            .map(|participant| Message::departed(&participant.name, &time))
            .collect();

        // Departures are durable before anyone is removed
        self.ctx.message_repo().create_many(&departures).await?;

        let departed: Vec<String> = stale.into_iter().map(|p| p.name).collect();
        let removed = self
            .ctx
            .participant_repo()
            .delete_stale(&departed, cutoff)
            .await?;

        Ok(ReapReport { departed, removed })
    }

    /// Run cycles every reap interval until `shutdown` flips to true
    ///
    /// Cycle failures are logged and the loop keeps going.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let period = self.ctx.presence().reap_interval;
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick completes immediately; the first cycle runs one period in
        ticker.tick().await;

        info!(interval_secs = period.as_secs(), "Presence reaper started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.reap_once().await {
                        Ok(report) if report.is_empty() => {
                            debug!("Reap cycle found nobody stale");
                        }
                        Ok(report) => {
                            info!(
                                departed = ?report.departed,
                                removed = report.removed,
                                "Reaped stale participants"
                            );
                        }
                        Err(e) => {
                            error!(error = %e, "Reap cycle failed, retrying next tick");
                        }
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Presence reaper stopped");
    }

    /// Spawn [`Self::run`] on the runtime
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}
