//! Dashboard handle
//!
//! The controller is shared between event handlers, the refresh timer and the
//! `window.CryptoDashboard` export. It is only borrowed for synchronous
//! steps; loads run between [`Dashboard::begin_refresh`] and the matching
//! completion so no borrow is held across an await. Loads are cut off after
//! the configured request timeout.

use std::cell::RefCell;
use std::rc::Rc;

use cryptodash::{Config, Dashboard, DataLoader, PriceFeed, SentimentFeed, UiEvent};
use gloo_timers::future::TimeoutFuture;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::source::GlooSource;
use crate::surface::WebSurface;

pub type WebDashboard = Dashboard<WebSurface>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum RefreshKind {
    Load,
    Tick,
}

/// Shared, clonable access to the dashboard and its loader
#[derive(Clone)]
pub struct DashboardHandle {
    dashboard: Rc<RefCell<WebDashboard>>,
    loader: Rc<DataLoader<GlooSource>>,
    load_timeout_ms: u32,
}

impl DashboardHandle {
    pub fn new(config: &Config, surface: WebSurface) -> Self {
        let dashboard = Dashboard::new(
            &config.selection,
            &config.chart,
            surface,
            StdRng::from_entropy(),
        );
        let loader = DataLoader::new(
            GlooSource::new(&config.resources.base),
            config.resources.paths(),
        );

        let load_timeout_ms = config.resources.load_timeout().as_millis();

        Self {
            dashboard: Rc::new(RefCell::new(dashboard)),
            loader: Rc::new(loader),
            load_timeout_ms: u32::try_from(load_timeout_ms).unwrap_or(u32::MAX),
        }
    }

    fn with<T>(&self, f: impl FnOnce(&mut WebDashboard) -> T) -> Option<T> {
        match self.dashboard.try_borrow_mut() {
            Ok(mut dashboard) => Some(f(&mut dashboard)),
            Err(_) => {
                web_sys::console::warn_1(&"Dashboard busy, call dropped".into());
                None
            }
        }
    }

    /// Route a UI event to the controller
    pub fn dispatch(&self, event: UiEvent) {
        self.with(|dashboard| dashboard.handle(event));
    }

    /// First load, then selectors and charts
    pub async fn start(&self) {
        self.refresh(RefreshKind::Load).await;
        self.with(|dashboard| dashboard.initialize());
        web_sys::console::log_1(&"Crypto Dashboard initialized".into());
    }

    /// Reload and redraw cards and overview
    pub async fn load_data(&self) -> bool {
        self.refresh(RefreshKind::Load).await
    }

    /// Timer step: reload, redraw cards, overview and gauge value
    pub async fn tick(&self) -> bool {
        self.refresh(RefreshKind::Tick).await
    }

    async fn refresh(&self, kind: RefreshKind) -> bool {
        let Some(ticket) = self.with(|dashboard| dashboard.begin_refresh()).flatten() else {
            web_sys::console::log_1(&"Load still in flight, skipping refresh".into());
            return false;
        };

        let deadline = TimeoutFuture::new(self.load_timeout_ms);
        let outcome = self.loader.load_within(deadline).await;

        when_free(&self.dashboard, |dashboard| match kind {
            RefreshKind::Load => dashboard.complete_refresh(ticket, outcome),
            RefreshKind::Tick => dashboard.finish_tick(ticket, outcome),
        })
        .await
    }

    /// Cards plus a regenerated price chart
    pub fn redraw_prices(&self) {
        self.with(|dashboard| dashboard.redraw_prices());
    }

    pub fn update_sentiment(&self) {
        self.with(|dashboard| dashboard.update_sentiment());
    }

    pub fn crypto_data(&self) -> Option<PriceFeed> {
        self.with(|dashboard| dashboard.crypto_data()).flatten()
    }

    pub fn sentiment_data(&self) -> Option<SentimentFeed> {
        self.with(|dashboard| dashboard.sentiment_data()).flatten()
    }

    pub fn correlation_data(&self) -> Option<serde_json::Value> {
        self.with(|dashboard| dashboard.correlation_data().map(|c| c.0.clone()))
            .flatten()
    }
}

/// Run `f` once `cell` is not borrowed. A refresh completion must not be
/// dropped, or the in-flight gate never reopens.
async fn when_free<D, T>(cell: &RefCell<D>, f: impl FnOnce(&mut D) -> T) -> T {
    loop {
        if let Ok(mut value) = cell.try_borrow_mut() {
            return f(&mut value);
        }
        TimeoutFuture::new(0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_when_free_waits_for_borrow() {
        let cell = RefCell::new(0);
        let held = cell.borrow_mut();

        let release = async move {
            TimeoutFuture::new(20).await;
            drop(held);
        };
        let complete = when_free(&cell, |n| {
            *n += 1;
            *n
        });

        let ((), value) = futures_util::join!(release, complete);
        assert_eq!(value, 1);
        assert_eq!(*cell.borrow(), 1);
    }
}
