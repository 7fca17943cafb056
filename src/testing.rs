//! Shared test fixtures

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::data::{LoadError, LoadResult, ResourcePaths, ResourceSource};

pub const PRICES_JSON: &str = r#"{
  "cryptocurrencies": [
    {
      "symbol": "BTC",
      "name": "Bitcoin",
      "price": 101234.56,
      "change24h": 1.5,
      "volume24h": 31000000000,
      "volumeChange": 4.2,
      "marketCap": 2010000000000,
      "volatility": 0.0198,
      "sparkline": [101000.1, 101100.2, 101234.56],
      "socialSentiment": 0.12,
      "buzzVolume": 45210,
      "lastUpdate": "2026-10-19T12:00:00"
    },
    {
      "symbol": "ETH",
      "name": "Ethereum",
      "price": 3620.1,
      "change24h": -0.75,
      "volume24h": 17250000000,
      "marketCap": 436000000000,
      "volatility": 0.027,
      "sparkline": [3630.0, 3625.5, 3620.1],
      "socialSentiment": -0.08,
      "buzzVolume": 21877
    },
    {
      "symbol": "SOL",
      "name": "Solana",
      "price": 187.44,
      "change24h": 0.0,
      "volume24h": 4100000000,
      "marketCap": 88500000000,
      "volatility": 0.2,
      "sparkline": [],
      "socialSentiment": 0.0,
      "buzzVolume": 1000
    }
  ],
  "marketOverview": {
    "totalMarketCap": 2534500000000,
    "totalVolume": 52350000000,
    "btcDominance": 79.31,
    "fearGreedIndex": 51,
    "socialSentiment": 0.01,
    "timestamp": "2026-10-19T12:00:00",
    "lastUpdate": "2026-10-19 12:00:00"
  },
  "metadata": { "updateInterval": 10, "lastFetch": "2026-10-19T12:00:00" }
}"#;

pub const SENTIMENT_JSON: &str = r#"{
  "sentimentOverview": {
    "overallSentiment": 0.31,
    "positive": 0.52,
    "negative": 0.21
  }
}"#;

pub const CORRELATION_JSON: &str = r#"{
  "pairs": [ { "a": "BTC", "b": "ETH", "correlation": 0.87 } ]
}"#;

/// In-memory resource source counting every fetch
pub struct MemorySource {
    bodies: RefCell<HashMap<String, String>>,
    fetches: Cell<usize>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            bodies: RefCell::new(HashMap::new()),
            fetches: Cell::new(0),
        }
    }

    pub fn with(self, path: &str, body: &str) -> Self {
        self.set(path, body);
        self
    }

    pub fn without(self, path: &str) -> Self {
        self.bodies.borrow_mut().remove(path);
        self
    }

    pub fn set(&self, path: &str, body: &str) {
        self.bodies
            .borrow_mut()
            .insert(path.to_string(), body.to_string());
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl ResourceSource for MemorySource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self, path: &str) -> LoadResult<String> {
        self.fetches.set(self.fetches.get() + 1);
        self.bodies
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::fetch(path, "not found"))
    }
}

/// Source serving the three fixture documents at the default paths
pub fn fixture_source() -> MemorySource {
    let paths = ResourcePaths::default();
    MemorySource::new()
        .with(&paths.prices, PRICES_JSON)
        .with(&paths.sentiment, SENTIMENT_JSON)
        .with(&paths.correlation, CORRELATION_JSON)
}

/// Source whose fetches never finish
pub struct StalledSource {
    fetches: Cell<usize>,
}

impl StalledSource {
    pub fn new() -> Self {
        Self {
            fetches: Cell::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl ResourceSource for StalledSource {
    fn describe(&self) -> String {
        "stalled".to_string()
    }

    async fn fetch(&self, _path: &str) -> LoadResult<String> {
        self.fetches.set(self.fetches.get() + 1);
        std::future::pending().await
    }
}
