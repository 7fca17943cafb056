//! Data loader
//!
//! Fetches the three dashboard resources concurrently and turns them into a
//! [`Snapshot`]. Loading is all-or-nothing: if any resource fails to fetch or
//! parse, callers of [`DataLoader::load_or_fallback`] get the built-in sample
//! snapshot for every data set.

use std::collections::HashSet;
use std::future::Future;

use futures_util::future::{join3, select, Either};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{LoadError, LoadResult};
use super::fallback::fallback_snapshot;
use super::source::ResourceSource;
use super::types::{CorrelationData, PriceFeed, SentimentFeed, Snapshot, SnapshotOrigin};

/// Relative paths of the three resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePaths {
    pub prices: String,
    pub sentiment: String,
    pub correlation: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            prices: "resources/data/crypto-prices.json".to_string(),
            sentiment: "resources/data/sentiment-data.json".to_string(),
            correlation: "resources/data/correlation-data.json".to_string(),
        }
    }
}

/// Result of a load that never fails
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub snapshot: Snapshot,
    pub origin: SnapshotOrigin,
}

impl LoadOutcome {
    pub fn live(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            origin: SnapshotOrigin::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            snapshot: fallback_snapshot(),
            origin: SnapshotOrigin::Fallback,
        }
    }
}

/// Loads dashboard snapshots from a [`ResourceSource`]
pub struct DataLoader<S> {
    source: S,
    paths: ResourcePaths,
}

impl<S: ResourceSource> DataLoader<S> {
    pub fn new(source: S, paths: ResourcePaths) -> Self {
        Self { source, paths }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    /// Fetch and parse all three resources.
    ///
    /// The fetches run concurrently; the first error in resource order is
    /// reported.
    pub async fn load(&self) -> LoadResult<Snapshot> {
        let (prices, sentiment, correlation) = join3(
            self.source.fetch(&self.paths.prices),
            self.source.fetch(&self.paths.sentiment),
            self.source.fetch(&self.paths.correlation),
        )
        .await;

        let prices: PriceFeed = parse(&self.paths.prices, &prices?)?;
        let sentiment: SentimentFeed = parse(&self.paths.sentiment, &sentiment?)?;
        let correlation: CorrelationData = parse(&self.paths.correlation, &correlation?)?;

        check_unique_symbols(&self.paths.prices, &prices)?;

        Ok(Snapshot {
            assets: prices.cryptocurrencies,
            overview: prices.market_overview,
            sentiment: sentiment.sentiment_overview,
            correlation,
        })
    }

    /// Load, replacing any failure with the fallback snapshot
    pub async fn load_or_fallback(&self) -> LoadOutcome {
        let result = self.load().await;
        self.settle(result)
    }

    /// Like [`DataLoader::load_or_fallback`], but a load still running when
    /// `deadline` resolves is dropped and counts as a fetch failure.
    pub async fn load_within<T>(&self, deadline: T) -> LoadOutcome
    where
        T: Future<Output = ()>,
    {
        let load = self.load();
        futures_util::pin_mut!(load, deadline);

        let result = match select(load, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(LoadError::fetch(
                self.source.describe(),
                "timed out waiting for resources",
            )),
        };
        self.settle(result)
    }

    fn settle(&self, result: LoadResult<Snapshot>) -> LoadOutcome {
        match result {
            Ok(snapshot) => {
                tracing::info!(
                    source = %self.source.describe(),
                    assets = snapshot.assets.len(),
                    "Data loaded successfully"
                );
                LoadOutcome::live(snapshot)
            }
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    resource = e.resource(),
                    error = %e,
                    "Error loading data, using fallback data"
                );
                LoadOutcome::fallback()
            }
        }
    }
}

fn parse<T: DeserializeOwned>(resource: &str, body: &str) -> LoadResult<T> {
    serde_json::from_str(body).map_err(|source| LoadError::Parse {
        resource: resource.to_string(),
        source,
    })
}

fn check_unique_symbols(resource: &str, feed: &PriceFeed) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for asset in &feed.cryptocurrencies {
        if !seen.insert(asset.symbol.as_str()) {
            return Err(LoadError::DuplicateSymbol {
                resource: resource.to_string(),
                symbol: asset.symbol.clone(),
            });
        }
    }
    Ok(())
}
