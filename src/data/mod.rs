//! Dashboard data: model types, resource sources and the loader.

pub mod error;
pub mod fallback;
pub mod loader;
pub mod source;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use fallback::{fallback_snapshot, DEFAULT_OVERALL_SENTIMENT};
pub use loader::{DataLoader, LoadOutcome, ResourcePaths};
pub use source::ResourceSource;
#[cfg(not(target_arch = "wasm32"))]
pub use source::{FsSource, HttpSource};
pub use types::{
    Asset, CorrelationData, MarketOverview, PriceFeed, Selection, SentimentFeed,
    SentimentSnapshot, Snapshot, SnapshotOrigin,
};
