//! App Root Component
//!
//! Main application component with the global state provider.

use leptos::*;

use crate::components::{Nav, Toast};
use crate::pages::Board;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Header
            <Nav />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8">
                <Board />
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
