//! Dashboard controller
//!
//! Owns the state store, the display surface and the selector rows, and turns
//! user events and completed loads into re-renders. Loading itself happens
//! outside (see [`crate::refresh`]) so the controller is never borrowed across
//! an await point; a refresh is bracketed by [`Dashboard::begin_refresh`] and
//! [`Dashboard::complete_refresh`].

use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{ChartConfig, SelectionConfig};
use crate::data::{
    Asset, CorrelationData, LoadOutcome, PriceFeed, SentimentFeed, DEFAULT_OVERALL_SENTIMENT,
};
use crate::store::StateStore;
use crate::surface::{ChartKind, DisplaySurface, Slot};
use crate::view::{
    price_chart_option, render_asset_cards, render_overview, render_selected_labels,
    sentiment_gauge_option, sentiment_gauge_update, synthesize_series, ControlGroup,
    SelectorGroup, UiEvent,
};

/// Proof that a refresh was started; hand it back with the load result
#[derive(Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
}

/// The dashboard: state, selectors and the surface they render to
pub struct Dashboard<D, R = StdRng> {
    store: StateStore,
    surface: D,
    rng: R,
    chart: ChartConfig,
    asset_controls: SelectorGroup,
    timeframe_controls: SelectorGroup,
    gauge_configured: bool,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl<D: DisplaySurface, R: Rng> Dashboard<D, R> {
    pub fn new(selection: &SelectionConfig, chart: &ChartConfig, surface: D, rng: R) -> Self {
        Self {
            store: StateStore::new(selection.initial_selection()),
            surface,
            rng,
            chart: chart.clone(),
            asset_controls: SelectorGroup::new(
                selection.assets.clone(),
                &selection.default_symbol,
            ),
            timeframe_controls: SelectorGroup::new(
                selection.timeframes.clone(),
                &selection.default_timeframe,
            ),
            gauge_configured: false,
            in_flight: None,
            next_seq: 0,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn asset_controls(&self) -> &SelectorGroup {
        &self.asset_controls
    }

    pub fn timeframe_controls(&self) -> &SelectorGroup {
        &self.timeframe_controls
    }

    /// Whether a load is currently outstanding
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// First paint of the selectors and both charts
    pub fn initialize(&mut self) {
        self.render_controls(ControlGroup::Asset);
        self.render_controls(ControlGroup::Timeframe);

        let score = self
            .store
            .snapshot()
            .map(|s| s.sentiment.overall_sentiment)
            .unwrap_or(DEFAULT_OVERALL_SENTIMENT);
        self.render_sentiment_gauge(score);

        self.update_selected_crypto();
        self.update_price_chart();
    }

    // ============ Refresh cycle ============

    /// Start a refresh, unless one is already running
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if let Some(seq) = self.in_flight {
            tracing::debug!(seq, "Load still in flight, skipping refresh");
            return None;
        }

        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        Some(RefreshTicket { seq: self.next_seq })
    }

    /// Store a finished load and redraw cards and overview.
    ///
    /// Returns false if the ticket does not belong to the outstanding refresh.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, outcome: LoadOutcome) -> bool {
        if self.in_flight != Some(ticket.seq) {
            tracing::warn!(seq = ticket.seq, "Discarding result of a stale refresh");
            return false;
        }
        self.in_flight = None;

        self.load_data(outcome);
        true
    }

    /// Give up on an outstanding refresh without storing anything.
    ///
    /// Returns false if the ticket does not belong to the outstanding refresh.
    pub fn abandon_refresh(&mut self, ticket: RefreshTicket) -> bool {
        if self.in_flight != Some(ticket.seq) {
            return false;
        }
        tracing::debug!(seq = ticket.seq, "Refresh abandoned");
        self.in_flight = None;
        true
    }

    /// Timer path: store the load, then redraw cards, overview and gauge value
    pub fn finish_tick(&mut self, ticket: RefreshTicket, outcome: LoadOutcome) -> bool {
        if !self.complete_refresh(ticket, outcome) {
            return false;
        }
        self.update_sentiment();
        true
    }

    /// Replace the snapshot and redraw what depends on it directly
    pub fn load_data(&mut self, outcome: LoadOutcome) {
        self.store.set_snapshot(outcome.snapshot, outcome.origin);
        tracing::debug!(
            generation = self.store.generation(),
            origin = ?outcome.origin,
            "Snapshot replaced"
        );

        self.update_prices();
        self.update_market_overview();
    }

    // ============ Renderers ============

    /// Rebuild the asset cards from the current snapshot
    pub fn update_prices(&mut self) {
        if self.store.snapshot().is_none() || !self.surface.has_slot(Slot::CryptoCards) {
            return;
        }
        let cards = render_asset_cards(self.store.assets());
        self.surface.set_cards(&cards);
    }

    /// Cards plus a fresh placeholder price chart. The timer path never does
    /// this; it is for callers that explicitly ask for a price redraw.
    pub fn redraw_prices(&mut self) {
        self.update_prices();
        self.update_price_chart();
    }

    pub fn update_market_overview(&mut self) {
        let Some(view) = render_overview(self.store.snapshot().map(|s| &s.overview)) else {
            return;
        };

        self.write_text(Slot::TotalMarketCap, &view.total_market_cap);
        self.write_text(Slot::TotalVolume, &view.total_volume);
        self.write_text(Slot::BtcDominance, &view.btc_dominance);
        self.write_text(Slot::FearGreed, &view.fear_greed);
        if let Some(last_update) = &view.last_update {
            self.write_text(Slot::LastUpdate, last_update);
        }
    }

    /// Push the current overall sentiment to the gauge
    pub fn update_sentiment(&mut self) {
        if let Some(score) = self.store.snapshot().map(|s| s.sentiment.overall_sentiment) {
            self.render_sentiment_gauge(score);
        }
    }

    fn render_sentiment_gauge(&mut self, score: f64) {
        if !self.surface.has_slot(ChartKind::SentimentGauge.slot()) {
            return;
        }

        if self.gauge_configured {
            self.surface
                .set_chart_option(ChartKind::SentimentGauge, &sentiment_gauge_update(score));
        } else {
            self.surface
                .set_chart_option(ChartKind::SentimentGauge, &sentiment_gauge_option(score));
            self.gauge_configured = true;
        }
    }

    /// Write the selected asset's name and symbol, if it exists
    pub fn update_selected_crypto(&mut self) {
        let Some(labels) = self.store.selected_asset().map(render_selected_labels) else {
            return;
        };

        self.write_text(Slot::SelectedCryptoName, &labels.name);
        self.write_text(Slot::SelectedCryptoSymbol, &labels.symbol);
    }

    /// Regenerate the placeholder price chart for the selected asset
    pub fn update_price_chart(&mut self) {
        if !self.surface.has_slot(ChartKind::Price.slot()) {
            return;
        }
        let Some(asset) = self.store.selected_asset() else {
            return;
        };

        let points = synthesize_series(
            asset,
            self.chart.point_count,
            self.chart.interval_ms,
            Utc::now(),
            &mut self.rng,
        );
        let option = price_chart_option(asset, &points);
        self.surface.set_chart_option(ChartKind::Price, &option);
    }

    fn render_controls(&mut self, group: ControlGroup) {
        if !self.surface.has_slot(group.slot()) {
            return;
        }
        let controls = match group {
            ControlGroup::Asset => &self.asset_controls,
            ControlGroup::Timeframe => &self.timeframe_controls,
        };
        self.surface.set_controls(group, controls);
    }

    fn write_text(&mut self, slot: Slot, text: &str) {
        if self.surface.has_slot(slot) {
            self.surface.set_text(slot, text);
        }
    }

    // ============ Interaction ============

    /// Dispatch a UI event
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::SelectAsset(symbol) => self.select_crypto(&symbol),
            UiEvent::SelectTimeframe(timeframe) => self.select_timeframe(&timeframe),
            UiEvent::Resize => self.resize(),
            UiEvent::MobileMenu => self.mobile_menu(),
        }
    }

    /// Select an asset, as if its selector button had been clicked
    pub fn select_crypto(&mut self, symbol: &str) {
        let timeframe = self.store.selection().timeframe.clone();
        self.store.set_selection(symbol, &timeframe);

        if !self.asset_controls.activate(symbol) {
            tracing::debug!(symbol, "Selected symbol has no selector button");
        }
        self.render_controls(ControlGroup::Asset);

        self.update_selected_crypto();
        self.update_price_chart();
    }

    /// Select a timeframe. Only the active button changes; the placeholder
    /// series does not depend on it.
    pub fn select_timeframe(&mut self, timeframe: &str) {
        let symbol = self.store.selection().symbol.clone();
        self.store.set_selection(&symbol, timeframe);

        self.timeframe_controls.activate(timeframe);
        self.render_controls(ControlGroup::Timeframe);

        self.update_price_chart();
    }

    /// Re-layout both charts
    pub fn resize(&mut self) {
        for chart in [ChartKind::Price, ChartKind::SentimentGauge] {
            if self.surface.has_slot(chart.slot()) {
                self.surface.resize_chart(chart);
            }
        }
    }

    pub fn mobile_menu(&self) {
        tracing::info!("Mobile menu clicked");
    }

    // ============ Raw data ============

    /// Prices resource as last stored
    pub fn crypto_data(&self) -> Option<PriceFeed> {
        self.store.snapshot().map(|s| PriceFeed {
            cryptocurrencies: s.assets.clone(),
            market_overview: s.overview.clone(),
        })
    }

    /// Sentiment resource as last stored
    pub fn sentiment_data(&self) -> Option<SentimentFeed> {
        self.store.snapshot().map(|s| SentimentFeed {
            sentiment_overview: s.sentiment.clone(),
        })
    }

    /// Correlation resource as last stored
    pub fn correlation_data(&self) -> Option<&CorrelationData> {
        self.store.snapshot().map(|s| &s.correlation)
    }

    /// Assets of the current snapshot
    pub fn assets(&self) -> &[Asset] {
        self.store.assets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{fallback_snapshot, Snapshot, SnapshotOrigin};
    use crate::surface::MemorySurface;
    use rand::SeedableRng;

    fn dashboard(surface: MemorySurface) -> Dashboard<MemorySurface> {
        Dashboard::new(
            &SelectionConfig::default(),
            &ChartConfig::default(),
            surface,
            StdRng::seed_from_u64(42),
        )
    }

    fn live(snapshot: Snapshot) -> LoadOutcome {
        LoadOutcome {
            snapshot,
            origin: SnapshotOrigin::Live,
        }
    }

    fn loaded(surface: MemorySurface) -> Dashboard<MemorySurface> {
        let mut dash = dashboard(surface);
        let ticket = dash.begin_refresh().unwrap();
        assert!(dash.complete_refresh(ticket, LoadOutcome::fallback()));
        dash.initialize();
        dash
    }

    #[test]
    fn test_refresh_stores_and_renders() {
        let dash = loaded(MemorySurface::new());

        assert_eq!(dash.store().snapshot(), Some(&fallback_snapshot()));
        assert_eq!(dash.surface().cards().len(), 2);
        assert_eq!(dash.surface().text(Slot::TotalMarketCap), Some("$2.85T"));
        assert_eq!(dash.surface().text(Slot::TotalVolume), Some("$52.3B"));
        assert_eq!(dash.surface().text(Slot::BtcDominance), Some("68.4%"));
        assert_eq!(dash.surface().text(Slot::FearGreed), Some("72"));
        assert_eq!(dash.surface().text(Slot::SelectedCryptoName), Some("Bitcoin"));
    }

    #[test]
    fn test_overlapping_refresh_refused() {
        let mut dash = dashboard(MemorySurface::new());

        let ticket = dash.begin_refresh().unwrap();
        assert!(dash.is_refreshing());
        assert!(dash.begin_refresh().is_none());

        assert!(dash.complete_refresh(ticket, LoadOutcome::fallback()));
        assert!(!dash.is_refreshing());
        assert!(dash.begin_refresh().is_some());
    }

    #[test]
    fn test_stale_ticket_discarded() {
        let mut dash = dashboard(MemorySurface::new());
        let ticket = dash.begin_refresh().unwrap();
        assert!(dash.complete_refresh(ticket, LoadOutcome::fallback()));

        let stale = RefreshTicket { seq: 1 };
        let _current = dash.begin_refresh().unwrap();

        let mut other = fallback_snapshot();
        other.assets.truncate(1);
        assert!(!dash.complete_refresh(stale, live(other)));
        assert_eq!(dash.store().snapshot(), Some(&fallback_snapshot()));
    }

    #[test]
    fn test_unknown_symbol_keeps_previous_details() {
        let mut dash = loaded(MemorySurface::new());
        let charts_before = dash.surface().chart_options(ChartKind::Price).len();

        dash.select_crypto("DOGE");

        assert_eq!(dash.store().selection().symbol, "DOGE");
        assert_eq!(dash.surface().text(Slot::SelectedCryptoName), Some("Bitcoin"));
        assert_eq!(dash.surface().text(Slot::SelectedCryptoSymbol), Some("BTC"));
        assert_eq!(dash.surface().chart_options(ChartKind::Price).len(), charts_before);
    }

    #[test]
    fn test_click_sequence_single_active() {
        let mut dash = loaded(MemorySurface::new());

        for symbol in ["BTC", "ETH", "BTC"] {
            dash.handle(UiEvent::SelectAsset(symbol.to_string()));
            let shown = dash.surface().controls(ControlGroup::Asset).unwrap();
            assert_eq!(shown.active_count(), 1);
        }

        let shown = dash.surface().controls(ControlGroup::Asset).unwrap();
        assert_eq!(shown.active_key(), Some("BTC"));
        assert_eq!(dash.surface().text(Slot::SelectedCryptoName), Some("Bitcoin"));
    }

    #[test]
    fn test_select_renders_chart_for_asset() {
        let mut dash = loaded(MemorySurface::new());
        dash.select_crypto("ETH");

        let option = dash.surface().last_chart_option(ChartKind::Price).unwrap();
        assert_eq!(option["title"]["text"], "Ethereum Price Chart");
        assert_eq!(option["series"][0]["data"].as_array().unwrap().len(), 100);
        assert_eq!(dash.surface().text(Slot::SelectedCryptoSymbol), Some("ETH"));
    }

    #[test]
    fn test_timeframe_changes_active_button_only() {
        let mut dash = loaded(MemorySurface::new());
        let charts_before = dash.surface().chart_options(ChartKind::Price).len();

        dash.handle(UiEvent::SelectTimeframe("7d".to_string()));

        assert_eq!(dash.store().selection().timeframe, "7d");
        assert_eq!(dash.store().selection().symbol, "BTC");
        let shown = dash.surface().controls(ControlGroup::Timeframe).unwrap();
        assert_eq!(shown.active_key(), Some("7d"));
        assert_eq!(dash.surface().chart_options(ChartKind::Price).len(), charts_before + 1);
    }

    #[test]
    fn test_gauge_full_then_value_only() {
        let mut dash = loaded(MemorySurface::new());

        let first = &dash.surface().chart_options(ChartKind::SentimentGauge)[0];
        assert_eq!(first["series"][0]["type"], "gauge");

        let ticket = dash.begin_refresh().unwrap();
        let mut next = fallback_snapshot();
        next.sentiment.overall_sentiment = -0.4;
        assert!(dash.finish_tick(ticket, live(next)));

        let last = dash.surface().last_chart_option(ChartKind::SentimentGauge).unwrap();
        assert_eq!(last, &sentiment_gauge_update(-0.4));
    }

    #[test]
    fn test_tick_does_not_regenerate_price_chart() {
        let mut dash = loaded(MemorySurface::new());
        let charts_before = dash.surface().chart_options(ChartKind::Price).len();
        let cards_before = dash.surface().card_renders();

        let ticket = dash.begin_refresh().unwrap();
        dash.finish_tick(ticket, LoadOutcome::fallback());

        assert_eq!(dash.surface().chart_options(ChartKind::Price).len(), charts_before);
        assert_eq!(dash.surface().card_renders(), cards_before + 1);
    }

    #[test]
    fn test_redraw_prices_regenerates_chart() {
        let mut dash = loaded(MemorySurface::new());
        let charts_before = dash.surface().chart_options(ChartKind::Price).len();
        let cards_before = dash.surface().card_renders();

        dash.redraw_prices();

        assert_eq!(dash.surface().chart_options(ChartKind::Price).len(), charts_before + 1);
        assert_eq!(dash.surface().card_renders(), cards_before + 1);
    }

    #[test]
    fn test_abandoned_refresh_reopens_gate() {
        let mut dash = dashboard(MemorySurface::new());
        let ticket = dash.begin_refresh().unwrap();
        assert!(dash.begin_refresh().is_none());

        assert!(dash.abandon_refresh(ticket));
        assert!(!dash.is_refreshing());
        assert!(dash.store().snapshot().is_none());

        let current = dash.begin_refresh().unwrap();
        assert!(!dash.abandon_refresh(RefreshTicket { seq: 1 }));
        assert!(dash.is_refreshing());
        assert!(dash.complete_refresh(current, LoadOutcome::fallback()));
    }

    #[test]
    fn test_missing_slots_are_skipped() {
        let surface = MemorySurface::new()
            .without(Slot::CryptoCards)
            .without(Slot::PriceChart)
            .without(Slot::SentimentGauge)
            .without(Slot::FearGreed);
        let mut dash = loaded(surface);
        dash.select_crypto("ETH");
        dash.update_sentiment();
        dash.resize();

        assert!(dash.surface().cards().is_empty());
        assert!(dash.surface().chart_options(ChartKind::Price).is_empty());
        assert!(dash.surface().chart_options(ChartKind::SentimentGauge).is_empty());
        assert_eq!(dash.surface().text(Slot::FearGreed), None);
        assert_eq!(dash.surface().text(Slot::TotalVolume), Some("$52.3B"));
        assert_eq!(dash.surface().resize_count(ChartKind::Price), 0);
    }

    #[test]
    fn test_resize_hits_both_charts() {
        let mut dash = loaded(MemorySurface::new());
        dash.handle(UiEvent::Resize);
        dash.handle(UiEvent::Resize);

        assert_eq!(dash.surface().resize_count(ChartKind::Price), 2);
        assert_eq!(dash.surface().resize_count(ChartKind::SentimentGauge), 2);
    }

    #[test]
    fn test_renders_before_first_load_are_noops() {
        let mut dash = dashboard(MemorySurface::new());
        dash.update_prices();
        dash.update_market_overview();
        dash.update_sentiment();
        dash.select_crypto("ETH");

        assert!(dash.surface().cards().is_empty());
        assert_eq!(dash.surface().text(Slot::TotalMarketCap), None);
        assert!(dash.surface().chart_options(ChartKind::SentimentGauge).is_empty());
        assert!(dash.crypto_data().is_none());
    }

    #[test]
    fn test_raw_data_accessors() {
        let dash = loaded(MemorySurface::new());

        let prices = dash.crypto_data().unwrap();
        assert_eq!(prices.cryptocurrencies.len(), 2);
        assert_eq!(prices.market_overview.fear_greed_index, 72);

        let sentiment = dash.sentiment_data().unwrap();
        assert_eq!(sentiment.sentiment_overview.overall_sentiment, DEFAULT_OVERALL_SENTIMENT);
        assert!(dash.correlation_data().is_some());
    }
}
