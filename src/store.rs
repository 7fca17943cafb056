//! State store
//!
//! Holds the latest snapshot and the user's selection. Owned by the
//! dashboard controller; there is exactly one per dashboard instance.

use crate::data::{Asset, Selection, Snapshot, SnapshotOrigin};

/// Latest loaded data plus current selection
#[derive(Debug, Clone)]
pub struct StateStore {
    snapshot: Option<Snapshot>,
    origin: Option<SnapshotOrigin>,
    selection: Selection,
    generation: u64,
}

impl StateStore {
    /// Empty store with the given initial selection
    pub fn new(selection: Selection) -> Self {
        Self {
            snapshot: None,
            origin: None,
            selection,
            generation: 0,
        }
    }

    /// Replace the whole snapshot
    pub fn set_snapshot(&mut self, snapshot: Snapshot, origin: SnapshotOrigin) {
        self.snapshot = Some(snapshot);
        self.origin = Some(origin);
        self.generation += 1;
    }

    /// Record a new selection. The symbol is checked lazily at render time.
    pub fn set_selection(&mut self, symbol: &str, timeframe: &str) {
        self.selection = Selection {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
        };
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn origin(&self) -> Option<SnapshotOrigin> {
        self.origin
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of snapshots stored so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Assets of the current snapshot, empty before the first load
    pub fn assets(&self) -> &[Asset] {
        self.snapshot
            .as_ref()
            .map(|s| s.assets.as_slice())
            .unwrap_or(&[])
    }

    /// The selected asset, if it exists in the current snapshot
    pub fn selected_asset(&self) -> Option<&Asset> {
        self.snapshot.as_ref()?.asset(&self.selection.symbol)
    }
}
