//! Dashboard data model
//!
//! Types mirroring the three JSON resources the dashboard reads, plus the
//! user's current selection.

use serde::{Deserialize, Serialize};

/// A single tracked cryptocurrency as published in the prices resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Ticker symbol, unique within a snapshot (e.g. "BTC")
    pub symbol: String,
    /// Display name (e.g. "Bitcoin")
    pub name: String,
    /// Last known price in USD
    pub price: f64,
    /// 24h change in percent
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    /// 24h traded volume in USD
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
    /// Market capitalisation in USD
    pub market_cap: f64,
    /// Volatility as a ratio (0.0234 = 2.34%)
    pub volatility: f64,
    /// Recent prices, oldest first
    #[serde(default)]
    pub sparkline: Vec<f64>,
    /// Social sentiment in [-1, 1]
    pub social_sentiment: f64,
    /// Mentions counted over the sampling window
    pub buzz_volume: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl Asset {
    /// Whether the 24h change counts as "up" (zero counts as up)
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}

/// Market-wide aggregates published alongside the asset list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub total_market_cap: f64,
    pub total_volume: f64,
    /// BTC dominance in percent
    pub btc_dominance: f64,
    pub fear_greed_index: i64,
    pub social_sentiment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// Payload of the prices resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFeed {
    pub cryptocurrencies: Vec<Asset>,
    pub market_overview: MarketOverview,
}

/// Overall sentiment plus whatever breakdowns the producer includes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSnapshot {
    pub overall_sentiment: f64,
    /// Breakdowns are carried through untouched
    #[serde(flatten)]
    pub breakdown: serde_json::Map<String, serde_json::Value>,
}

impl SentimentSnapshot {
    pub fn new(overall_sentiment: f64) -> Self {
        Self {
            overall_sentiment,
            breakdown: serde_json::Map::new(),
        }
    }
}

/// Payload of the sentiment resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentFeed {
    pub sentiment_overview: SentimentSnapshot,
}

/// Correlation resource, stored and exported but never rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationData(pub serde_json::Value);

impl Default for CorrelationData {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

/// Everything one load produces. Replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub assets: Vec<Asset>,
    pub overview: MarketOverview,
    pub sentiment: SentimentSnapshot,
    pub correlation: CorrelationData,
}

impl Snapshot {
    /// Find an asset by symbol
    pub fn asset(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }
}

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOrigin {
    /// Parsed from the live resources
    Live,
    /// Built-in sample data after a failed load
    Fallback,
}

/// Currently chosen asset and timeframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub symbol: String,
    pub timeframe: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            symbol: "BTC".to_string(),
            timeframe: "1h".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_wire_names() {
        let json = r#"{
            "symbol": "SOL",
            "name": "Solana",
            "price": 187.5,
            "change24h": -3.1,
            "volume24h": 4200000000,
            "marketCap": 88000000000,
            "volatility": 0.041,
            "socialSentiment": -0.2,
            "buzzVolume": 12000,
            "volumeChange": 12.5,
            "someFutureField": true
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.symbol, "SOL");
        assert_eq!(asset.change_24h, -3.1);
        assert_eq!(asset.volume_24h, 4_200_000_000.0);
        assert_eq!(asset.market_cap, 88_000_000_000.0);
        assert_eq!(asset.buzz_volume, 12000);
        assert_eq!(asset.volume_change, Some(12.5));
        assert!(asset.sparkline.is_empty());
        assert!(!asset.is_up());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let json = r#"{ "symbol": "SOL", "name": "Solana", "price": 187.5 }"#;
        assert!(serde_json::from_str::<Asset>(json).is_err());
    }

    #[test]
    fn test_sentiment_keeps_breakdown() {
        let json = r#"{
            "sentimentOverview": {
                "overallSentiment": 0.42,
                "twitter": 0.5,
                "reddit": 0.3
            }
        }"#;

        let feed: SentimentFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.sentiment_overview.overall_sentiment, 0.42);
        assert_eq!(feed.sentiment_overview.breakdown.len(), 2);
    }

    #[test]
    fn test_zero_change_counts_as_up() {
        let mut asset = crate::data::fallback::fallback_snapshot().assets[0].clone();
        asset.change_24h = 0.0;
        assert!(asset.is_up());
    }
}
