//! Charts Section
//!
//! Price chart for the selected asset with its selectors, and the sentiment
//! gauge. The chart containers are left empty for ECharts to fill.

use cryptodash::{ControlGroup, Slot};
use leptos::*;

use crate::components::Selector;
use crate::surface::ViewSignals;

#[component]
pub fn ChartsSection() -> impl IntoView {
    let signals = use_context::<ViewSignals>().expect("ViewSignals not found");

    view! {
        <section id="charts" class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 bg-gray-800 rounded-xl p-6 border border-gray-700">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-4">
                    <div>
                        <h2
                            id=Slot::SelectedCryptoName.element_id()
                            class="text-xl font-semibold text-white"
                        >
                            {move || signals.text_or(Slot::SelectedCryptoName, "")}
                        </h2>
                        <p
                            id=Slot::SelectedCryptoSymbol.element_id()
                            class="text-sm text-gray-400"
                        >
                            {move || signals.text_or(Slot::SelectedCryptoSymbol, "")}
                        </p>
                    </div>
                    <Selector group=ControlGroup::Timeframe />
                </div>

                <div class="mb-4">
                    <Selector group=ControlGroup::Asset />
                </div>

                <div id=Slot::PriceChart.element_id() class="w-full h-96" />
            </div>

            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <h2 class="text-xl font-semibold text-white mb-4">"Market Sentiment"</h2>
                <div id=Slot::SentimentGauge.element_id() class="w-full h-80" />
            </div>
        </section>
    }
}
