//! App Root Component
//!
//! Builds the dashboard, provides it to the components and starts the first
//! load, the refresh timer and the window listeners.

use cryptodash::{Config, Slot, UiEvent};
use gloo_timers::callback::Interval;
use leptos::*;

use crate::components::{ChartsSection, CryptoCards, MarketOverview, Nav};
use crate::export;
use crate::state::DashboardHandle;
use crate::surface::{ViewSignals, WebSurface};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = Config::default();

    let signals = ViewSignals::new();
    provide_context(signals);

    let handle = DashboardHandle::new(&config, WebSurface::new(signals));
    provide_context(handle.clone());

    if let Err(e) = export::install(&handle) {
        web_sys::console::error_1(&e);
    }

    // Runs after mount, so the chart containers exist by the first render
    let startup = handle.clone();
    let period = config.refresh.interval_ms.min(u32::MAX as u64) as u32;
    spawn_local(async move {
        startup.start().await;

        let timer = startup.clone();
        Interval::new(period, move || {
            let timer = timer.clone();
            spawn_local(async move {
                web_sys::console::log_1(&"Auto-updating with latest data".into());
                timer.tick().await;
            });
        })
        .forget();
    });

    let resize = handle;
    window_event_listener(ev::resize, move |_| resize.dispatch(UiEvent::Resize));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 space-y-8">
                <MarketOverview />
                <ChartsSection />
                <CryptoCards />
            </main>

            <Footer />
        </div>
    }
}

/// Footer with the last-update time of the market data
#[component]
fn Footer() -> impl IntoView {
    let signals = use_context::<ViewSignals>().expect("ViewSignals not found");

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"Crypto Sentiment Dashboard"</span>
                <span id=Slot::LastUpdate.element_id()>
                    {move || signals.text_or(Slot::LastUpdate, "Not updated yet")}
                </span>
            </div>
        </footer>
    }
}
