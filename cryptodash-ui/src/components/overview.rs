//! Market Overview Component
//!
//! Four headline figures for the whole market.

use cryptodash::Slot;
use leptos::*;

use crate::surface::ViewSignals;

#[component]
pub fn MarketOverview() -> impl IntoView {
    view! {
        <section id="market-overview" class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <OverviewTile label="Total Market Cap" target=Slot::TotalMarketCap />
            <OverviewTile label="24h Volume" target=Slot::TotalVolume />
            <OverviewTile label="BTC Dominance" target=Slot::BtcDominance />
            <OverviewTile label="Fear & Greed" target=Slot::FearGreed />
        </section>
    }
}

#[component]
fn OverviewTile(label: &'static str, target: Slot) -> impl IntoView {
    let signals = use_context::<ViewSignals>().expect("ViewSignals not found");

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <p class="text-sm text-gray-400">{label}</p>
            <p id=target.element_id() class="text-2xl font-bold text-white mt-1">
                {move || signals.text_or(target, "--")}
            </p>
        </div>
    }
}
