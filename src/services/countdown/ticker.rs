use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::MissedTickBehavior;

use super::sink::{DisplaySink, SinkError};
use crate::models::countdown::{CountdownFrame, CountdownParts, RegionId, SlotId};
use crate::services::clock::Clock;
use crate::services::deadline::DeadlineSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Idle,
    Ticking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered(CountdownFrame),
    /// Nothing was written; the next tick recomputes from scratch.
    Skipped,
}

/// Recomputes the countdown from the clock on every tick.
///
/// Ticks carry no state forward except the last deadline, which is only used
/// to log rollovers. A delayed or dropped tick corrects itself on the next one.
pub struct CountdownTicker<C, D, S> {
    clock: C,
    deadlines: D,
    sink: S,
    state: TickerState,
    last_deadline: Option<DateTime<Utc>>,
}

impl<C, D, S> CountdownTicker<C, D, S>
where
    C: Clock,
    D: DeadlineSource,
    S: DisplaySink,
{
    pub fn new(clock: C, deadlines: D, sink: S) -> Self {
        Self {
            clock,
            deadlines,
            sink,
            state: TickerState::Idle,
            last_deadline: None,
        }
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.state = TickerState::Ticking;
        let now = self.clock.now();

        let deadline = match self.deadlines.next_deadline(now) {
            Ok(deadline) => deadline,
            Err(err) => {
                log::error!("Could not resolve deadline at {}: {}", now, err);
                return TickOutcome::Skipped;
            }
        };

        if self.last_deadline != Some(deadline) {
            match self.last_deadline {
                Some(previous) => log::info!("Deadline rolled over from {} to {}", previous, deadline),
                None => log::info!("Counting down to {}", deadline),
            }
            self.last_deadline = Some(deadline);
        }

        let Some(parts) = CountdownParts::from_duration(deadline - now) else {
            log::warn!(
                "Remaining time is not positive at {} (deadline {}), skipping tick",
                now,
                deadline
            );
            return TickOutcome::Skipped;
        };

        for slot in SlotId::ALL {
            let text = parts.text_for(slot);
            report(self.sink.write_slot(slot, &text));
        }
        report(self.sink.set_region_visible(RegionId::Primary, true));
        report(self.sink.set_region_visible(RegionId::Fallback, false));

        let frame = CountdownFrame {
            now,
            deadline,
            parts,
        };
        report(self.sink.present(&frame));
        TickOutcome::Rendered(frame)
    }

    /// Ticks every `period` until `shutdown` completes. The first tick fires
    /// immediately. Returns the number of rendered ticks.
    pub async fn run_until<F>(&mut self, period: Duration, shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut rendered = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    log::info!("Countdown stopped after {} rendered ticks", rendered);
                    break;
                }
                _ = interval.tick() => {
                    if let TickOutcome::Rendered(_) = self.tick() {
                        rendered += 1;
                    }
                }
            }
        }
        rendered
    }
}

/// Missing elements are expected on partial displays; other failures are not
/// fatal either, the next tick writes everything again.
fn report(result: Result<(), SinkError>) {
    match result {
        Ok(()) => {}
        Err(SinkError::MissingElement(id)) => log::debug!("Skipping missing element '{}'", id),
        Err(err) => log::warn!("Countdown display update failed: {}", err),
    }
}
