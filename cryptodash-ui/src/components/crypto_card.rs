//! Crypto Card Component
//!
//! One card per asset in the current snapshot. The whole container is rebuilt
//! on every price update.

use cryptodash::{AssetCard, Slot};
use leptos::*;

use crate::state::DashboardHandle;
use crate::surface::ViewSignals;

/// Card grid
#[component]
pub fn CryptoCards() -> impl IntoView {
    let signals = use_context::<ViewSignals>().expect("ViewSignals not found");

    view! {
        <section
            id=Slot::CryptoCards.element_id()
            class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6"
        >
            {move || {
                signals.cards.get()
                    .into_iter()
                    .map(|card| view! { <CryptoCard card=card /> })
                    .collect_view()
            }}
        </section>
    }
}

/// Single asset card; clicking selects the asset
#[component]
fn CryptoCard(card: AssetCard) -> impl IntoView {
    let handle = use_context::<DashboardHandle>().expect("DashboardHandle not found");
    let event = card.on_click();
    let on_click = move |_| handle.dispatch(event.clone());

    view! {
        <div
            class="crypto-card bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-blue-500 transition-all cursor-pointer"
            on:click=on_click
        >
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h3 class="text-lg font-semibold text-white">{card.name.clone()}</h3>
                    <p class="text-sm text-gray-400">{card.symbol.clone()}</p>
                </div>
                <div class="text-right">
                    <p class="text-xl font-bold text-white">{card.price.clone()}</p>
                    <p class=format!("text-sm {}", card.change_tone.css_class())>
                        {card.change.clone()}
                    </p>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4 text-sm">
                <CardStat label="Market Cap" value=card.market_cap.clone() />
                <CardStat label="Volume 24h" value=card.volume.clone() />
                <div>
                    <p class="text-gray-400">"Social Sentiment"</p>
                    <p class=format!("font-medium {}", card.sentiment_tone.css_class())>
                        {card.sentiment.clone()}
                    </p>
                </div>
                <CardStat label="Buzz Volume" value=card.buzz_volume.clone() />
            </div>

            <div class="mt-4">
                <div class="flex justify-between text-xs text-gray-400 mb-1">
                    <span>"Volatility"</span>
                    <span>{card.volatility.clone()}</span>
                </div>
                <div class="w-full bg-gray-700 rounded-full h-2">
                    <div
                        class="bg-gradient-to-r from-yellow-400 to-red-500 h-2 rounded-full"
                        style=card.volatility_bar_style()
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CardStat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-gray-400">{label}</p>
            <p class="text-white font-medium">{value}</p>
        </div>
    }
}
