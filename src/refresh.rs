//! Refresh cycle
//!
//! Drives the loader and the dashboard: an initial load followed by a reload
//! every refresh period. Each step takes a ticket from the dashboard first, so
//! a load that is still running causes the next tick to be skipped rather
//! than raced. Every load is bounded by `load_timeout`; a load that runs past
//! it is dropped and the fallback snapshot is stored instead.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use crate::dashboard::Dashboard;
use crate::data::{DataLoader, ResourceSource};
use crate::surface::DisplaySurface;

/// Load once and store the result. Returns false if a load was in flight.
pub async fn refresh<D, R, S>(
    dashboard: &mut Dashboard<D, R>,
    loader: &DataLoader<S>,
    load_timeout: Duration,
) -> bool
where
    D: DisplaySurface,
    R: Rng,
    S: ResourceSource,
{
    let Some(ticket) = dashboard.begin_refresh() else {
        return false;
    };
    let outcome = loader.load_within(sleep(load_timeout)).await;
    dashboard.complete_refresh(ticket, outcome)
}

/// Startup: first load, then draw selectors and charts
pub async fn start<D, R, S>(
    dashboard: &mut Dashboard<D, R>,
    loader: &DataLoader<S>,
    load_timeout: Duration,
) where
    D: DisplaySurface,
    R: Rng,
    S: ResourceSource,
{
    refresh(dashboard, loader, load_timeout).await;
    dashboard.initialize();
}

/// One timer tick: reload, then redraw cards, overview and gauge value
pub async fn tick<D, R, S>(
    dashboard: &mut Dashboard<D, R>,
    loader: &DataLoader<S>,
    load_timeout: Duration,
) -> bool
where
    D: DisplaySurface,
    R: Rng,
    S: ResourceSource,
{
    let Some(ticket) = dashboard.begin_refresh() else {
        return false;
    };
    let outcome = loader.load_within(sleep(load_timeout)).await;
    dashboard.finish_tick(ticket, outcome)
}

/// Tick every `period` until `shutdown` resolves. The first tick comes one
/// period after the call. A load in flight when `shutdown` resolves is
/// abandoned. Returns the number of completed ticks.
///
/// `period` must be non-zero.
pub async fn run<D, R, S, F>(
    dashboard: &mut Dashboard<D, R>,
    loader: &DataLoader<S>,
    period: Duration,
    load_timeout: Duration,
    shutdown: F,
) -> u64
where
    D: DisplaySurface,
    R: Rng,
    S: ResourceSource,
    F: Future<Output = ()>,
{
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    let mut ticks = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = interval.tick() => {}
        }

        let Some(ticket) = dashboard.begin_refresh() else {
            continue;
        };
        tracing::info!("Auto-updating with latest data");

        tokio::select! {
            _ = &mut shutdown => {
                dashboard.abandon_refresh(ticket);
                break;
            }
            outcome = loader.load_within(sleep(load_timeout)) => {
                if dashboard.finish_tick(ticket, outcome) {
                    ticks += 1;
                }
            }
        }
    }

    tracing::info!(ticks, "Refresh loop stopped");
    ticks
}
