//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::MyElectric;
use crate::state::{provide_view_model, start_demo_feed, MyElectricViewModel};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the view-model to all components
    provide_view_model();

    // Start the simulated feed; it only runs while the screen is active
    // and configured.
    let vm = use_context::<MyElectricViewModel>().expect("MyElectricViewModel not found");
    start_demo_feed(vm);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=MyElectric />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with feed status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing feed status
#[component]
fn Footer() -> impl IntoView {
    let vm = use_context::<MyElectricViewModel>().expect("MyElectricViewModel not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Feed status
                <div class="flex items-center space-x-2">
                    {move || {
                        if vm.active.get() && vm.is_ready.get() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Live"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                    <span>"Paused"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Last update time
                <div class="text-gray-400">
                    {move || {
                        let generated_at = vm.data.with(|d| d.generated_at);
                        if generated_at == 0 {
                            "No data yet".to_string()
                        } else {
                            chrono::DateTime::from_timestamp(generated_at, 0)
                                .map(|dt| format!("Updated: {}", dt.format("%H:%M:%S")))
                                .unwrap_or_else(|| "No data yet".to_string())
                        }
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to My Electric"
            </A>
        </div>
    }
}
