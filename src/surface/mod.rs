//! Display surface
//!
//! The seam between the dashboard and whatever shows it. The browser
//! front-end maps slots to DOM elements and charts to ECharts instances; the
//! in-memory surface records writes for the headless runner and for tests.

mod memory;

pub use memory::MemorySurface;

use serde::Serialize;
use serde_json::Value;

use crate::view::{AssetCard, ControlGroup, SelectorGroup};

/// Named display targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    CryptoCards,
    TotalMarketCap,
    TotalVolume,
    BtcDominance,
    FearGreed,
    LastUpdate,
    SelectedCryptoName,
    SelectedCryptoSymbol,
    AssetSelector,
    TimeframeSelector,
    SentimentGauge,
    PriceChart,
}

impl Slot {
    pub const ALL: [Slot; 12] = [
        Slot::CryptoCards,
        Slot::TotalMarketCap,
        Slot::TotalVolume,
        Slot::BtcDominance,
        Slot::FearGreed,
        Slot::LastUpdate,
        Slot::SelectedCryptoName,
        Slot::SelectedCryptoSymbol,
        Slot::AssetSelector,
        Slot::TimeframeSelector,
        Slot::SentimentGauge,
        Slot::PriceChart,
    ];

    /// DOM id of the element backing this slot
    pub fn element_id(&self) -> &'static str {
        match self {
            Slot::CryptoCards => "crypto-cards",
            Slot::TotalMarketCap => "total-market-cap",
            Slot::TotalVolume => "total-volume",
            Slot::BtcDominance => "btc-dominance",
            Slot::FearGreed => "fear-greed",
            Slot::LastUpdate => "last-update",
            Slot::SelectedCryptoName => "selected-crypto-name",
            Slot::SelectedCryptoSymbol => "selected-crypto-symbol",
            Slot::AssetSelector => "crypto-selector",
            Slot::TimeframeSelector => "time-selector",
            Slot::SentimentGauge => "sentiment-gauge",
            Slot::PriceChart => "price-chart",
        }
    }
}

/// The two chart instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    SentimentGauge,
    Price,
}

impl ChartKind {
    pub fn slot(&self) -> Slot {
        match self {
            ChartKind::SentimentGauge => Slot::SentimentGauge,
            ChartKind::Price => Slot::PriceChart,
        }
    }
}

impl ControlGroup {
    pub fn slot(&self) -> Slot {
        match self {
            ControlGroup::Asset => Slot::AssetSelector,
            ControlGroup::Timeframe => Slot::TimeframeSelector,
        }
    }
}

/// Something that can show the dashboard.
///
/// Callers check [`DisplaySurface::has_slot`] before writing; a write to a
/// missing slot may be ignored by the implementation.
pub trait DisplaySurface {
    /// Whether the target for `slot` exists
    fn has_slot(&self, slot: Slot) -> bool;

    /// Replace the text content of a label slot
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Replace the card container content
    fn set_cards(&mut self, cards: &[AssetCard]);

    /// Redraw the active state of a selector row
    fn set_controls(&mut self, group: ControlGroup, controls: &SelectorGroup);

    /// Merge `option` into the chart's configuration
    fn set_chart_option(&mut self, chart: ChartKind, option: &Value);

    /// Re-layout the chart to its container size
    fn resize_chart(&mut self, chart: ChartKind);
}
