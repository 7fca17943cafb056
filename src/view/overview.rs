//! Market overview strip and selected-asset labels

use serde::Serialize;

use super::format::{usd_billions, usd_trillions};
use crate::data::{Asset, MarketOverview};

/// Text for the four overview metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewView {
    pub total_market_cap: String,
    pub total_volume: String,
    pub btc_dominance: String,
    pub fear_greed: String,
    pub last_update: Option<String>,
}

/// Format the market overview, or nothing if there is none yet
pub fn render_overview(overview: Option<&MarketOverview>) -> Option<OverviewView> {
    let overview = overview?;

    Some(OverviewView {
        total_market_cap: usd_trillions(overview.total_market_cap, 2),
        total_volume: usd_billions(overview.total_volume, 1),
        btc_dominance: format!("{}%", overview.btc_dominance),
        fear_greed: overview.fear_greed_index.to_string(),
        last_update: overview
            .last_update
            .as_ref()
            .map(|ts| format!("Last updated: {}", ts)),
    })
}

/// Header labels for the selected asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedLabels {
    pub name: String,
    pub symbol: String,
}

pub fn render_selected_labels(asset: &Asset) -> SelectedLabels {
    SelectedLabels {
        name: asset.name.clone(),
        symbol: asset.symbol.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_snapshot;

    #[test]
    fn test_overview_text() {
        let snapshot = fallback_snapshot();
        let view = render_overview(Some(&snapshot.overview)).unwrap();

        assert_eq!(view.total_market_cap, "$2.85T");
        assert_eq!(view.total_volume, "$52.3B");
        assert_eq!(view.btc_dominance, "68.4%");
        assert_eq!(view.fear_greed, "72");
        assert_eq!(view.last_update, None);
    }

    #[test]
    fn test_whole_number_dominance() {
        let mut overview = fallback_snapshot().overview;
        overview.btc_dominance = 70.0;
        overview.last_update = Some("2026-10-19 12:00:00".to_string());

        let view = render_overview(Some(&overview)).unwrap();
        assert_eq!(view.btc_dominance, "70%");
        assert_eq!(view.last_update.as_deref(), Some("Last updated: 2026-10-19 12:00:00"));
    }

    #[test]
    fn test_absent_overview() {
        assert_eq!(render_overview(None), None);
    }
}
