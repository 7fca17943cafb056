//! Built-in sample data used when the live resources cannot be loaded

use super::types::{Asset, CorrelationData, MarketOverview, SentimentSnapshot, Snapshot};

/// Overall sentiment shown when nothing better is known
pub const DEFAULT_OVERALL_SENTIMENT: f64 = 0.67;

/// The fixed sample snapshot. Every call returns an identical value.
pub fn fallback_snapshot() -> Snapshot {
    Snapshot {
        assets: vec![
            Asset {
                symbol: "BTC".to_string(),
                name: "Bitcoin".to_string(),
                price: 98750.32,
                change_24h: 2.34,
                volume_24h: 28_500_000_000.0,
                market_cap: 1_950_000_000_000.0,
                volatility: 0.0234,
                sparkline: vec![
                    98123.0, 98345.0, 98750.0, 98567.0, 98923.0, 98750.0, 99123.0, 98750.0,
                    98543.0, 98750.0,
                ],
                social_sentiment: 0.67,
                buzz_volume: 89432,
                volume_change: None,
                last_update: None,
            },
            Asset {
                symbol: "ETH".to_string(),
                name: "Ethereum".to_string(),
                price: 3456.78,
                change_24h: -1.23,
                volume_24h: 15_600_000_000.0,
                market_cap: 415_000_000_000.0,
                volatility: 0.0312,
                sparkline: vec![
                    3456.0, 3423.0, 3456.0, 3489.0, 3456.0, 3434.0, 3456.0, 3478.0, 3456.0,
                    3456.0,
                ],
                social_sentiment: 0.45,
                buzz_volume: 56789,
                volume_change: None,
                last_update: None,
            },
        ],
        overview: MarketOverview {
            total_market_cap: 2_850_000_000_000.0,
            total_volume: 52_300_000_000.0,
            btc_dominance: 68.4,
            fear_greed_index: 72,
            social_sentiment: 0.56,
            last_update: None,
        },
        sentiment: SentimentSnapshot::new(DEFAULT_OVERALL_SENTIMENT),
        correlation: CorrelationData::default(),
    }
}
