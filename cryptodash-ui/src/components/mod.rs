//! UI Components
//!
//! Leptos components for the dashboard page. Each one renders from the
//! [`crate::surface::ViewSignals`] in context and reports clicks through the
//! [`crate::state::DashboardHandle`].

pub mod charts;
pub mod crypto_card;
pub mod nav;
pub mod overview;
pub mod selector;

pub use charts::ChartsSection;
pub use crypto_card::CryptoCards;
pub use nav::Nav;
pub use overview::MarketOverview;
pub use selector::Selector;
