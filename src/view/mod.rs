//! View projection
//!
//! Pure functions from dashboard state to declarative view descriptions:
//! card models, label text and chart option documents. Nothing here touches
//! a display; see [`crate::surface`] for that.

pub mod cards;
pub mod controls;
pub mod format;
pub mod gauge;
pub mod overview;
pub mod price_chart;

pub use cards::{render_asset_cards, volatility_bar_width, AssetCard, Tone, Trend};
pub use controls::{ControlGroup, SelectorGroup, UiEvent};
pub use format::price_tooltip;
pub use gauge::{gauge_label, sentiment_gauge_option, sentiment_gauge_update};
pub use overview::{render_overview, render_selected_labels, OverviewView, SelectedLabels};
pub use price_chart::{price_chart_option, synthesize_series, PricePoint};
