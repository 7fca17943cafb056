//! # Cryptodash
//!
//! Crypto sentiment dashboard core. Loads three static JSON resources (prices
//! with a market overview, a sentiment summary, a correlation document),
//! keeps them as one atomic snapshot and projects that snapshot into asset
//! cards, overview labels and chart options for a display surface.
//!
//! ## Modules
//!
//! - [`data`]: model types, resource sources and the loader with its fallback
//! - [`store`]: the snapshot and the current selection
//! - [`view`]: pure projections to card models, label text and chart options
//! - [`surface`]: the display seam and an in-memory implementation
//! - [`dashboard`]: the controller tying the above together
//! - `refresh` (native): startup and the periodic reload
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cryptodash::*;
//! use rand::SeedableRng;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let loader = DataLoader::new(FsSource::new("."), config.resources.paths());
//!
//!     let mut dashboard = Dashboard::new(
//!         &config.selection,
//!         &config.chart,
//!         MemorySurface::new(),
//!         rand::rngs::StdRng::from_entropy(),
//!     );
//!     refresh::start(&mut dashboard, &loader, config.resources.load_timeout()).await;
//!
//!     println!("{}", dashboard.surface().to_json());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
#[cfg(not(target_arch = "wasm32"))]
pub mod refresh;
pub mod store;
pub mod surface;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::{
    ChartConfig, Config, ConfigError, ConfigOrigin, LoggingConfig, RefreshConfig, ResourceConfig,
    SelectionConfig,
};

pub use dashboard::{Dashboard, RefreshTicket};

pub use data::{
    fallback_snapshot, Asset, CorrelationData, DataLoader, LoadError, LoadOutcome, LoadResult,
    MarketOverview, PriceFeed, ResourcePaths, ResourceSource, Selection, SentimentFeed,
    SentimentSnapshot, Snapshot, SnapshotOrigin,
};

#[cfg(not(target_arch = "wasm32"))]
pub use data::{FsSource, HttpSource};

pub use store::StateStore;

pub use surface::{ChartKind, DisplaySurface, MemorySurface, Slot};

pub use view::{AssetCard, ControlGroup, SelectorGroup, UiEvent};
