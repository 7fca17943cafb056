//! Asset cards
//!
//! One card per asset with price, change, market figures, volatility bar and
//! social sentiment.

use serde::Serialize;

use super::controls::UiEvent;
use super::format::{group_thousands, ratio_percent, signed, usd, usd_billions};
use crate::data::Asset;

/// Colour treatment for a signed figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Non-negative values are positive
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "text-emerald-400",
            Tone::Negative => "text-red-400",
        }
    }
}

/// Direction arrow shown next to the 24h change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
        }
    }
}

/// Display-ready card for one asset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetCard {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub trend: Trend,
    pub change_tone: Tone,
    /// Absolute change with arrow, e.g. "↘ 1.23%"
    pub change: String,
    pub market_cap: String,
    pub volume: String,
    pub volatility: String,
    /// Width of the volatility bar in percent, within [0, 100]
    pub volatility_bar: f64,
    pub sentiment: String,
    pub sentiment_tone: Tone,
    pub buzz_volume: String,
}

impl AssetCard {
    pub fn from_asset(asset: &Asset) -> Self {
        let trend = if asset.is_up() { Trend::Up } else { Trend::Down };

        Self {
            symbol: asset.symbol.clone(),
            name: asset.name.clone(),
            price: usd(asset.price),
            trend,
            change_tone: Tone::of(asset.change_24h),
            change: format!("{} {}%", trend.glyph(), asset.change_24h.abs()),
            market_cap: usd_billions(asset.market_cap, 2),
            volume: usd_billions(asset.volume_24h, 2),
            volatility: ratio_percent(asset.volatility),
            volatility_bar: volatility_bar_width(asset.volatility),
            sentiment: signed(asset.social_sentiment, 2),
            sentiment_tone: Tone::of(asset.social_sentiment),
            buzz_volume: group_thousands(asset.buzz_volume as f64),
        }
    }

    /// Event raised when the card is clicked
    pub fn on_click(&self) -> UiEvent {
        UiEvent::SelectAsset(self.symbol.clone())
    }

    /// Inline style for the volatility bar
    pub fn volatility_bar_style(&self) -> String {
        format!("width: {}%", self.volatility_bar)
    }
}

/// Bar width for a volatility ratio: ten times the percentage, capped at 100
pub fn volatility_bar_width(volatility: f64) -> f64 {
    (volatility * 1000.0).clamp(0.0, 100.0)
}

/// Project every asset into a card, preserving order
pub fn render_asset_cards(assets: &[Asset]) -> Vec<AssetCard> {
    assets.iter().map(AssetCard::from_asset).collect()
}
