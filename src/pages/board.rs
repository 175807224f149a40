//! Board Page
//!
//! The activity board: every activity with its roster, plus the signup form.

use leptos::*;

use crate::api;
use crate::components::{ActivityCard, CardSkeleton, SignupForm};
use crate::state::global::GlobalState;

/// Board page component
#[component]
pub fn Board() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Full refresh: authoritative replacement of the collection. If two
    // refreshes overlap, the later response wins.
    let state_for_load = state.clone();
    let load_activities = move || {
        let state = state_for_load.clone();
        spawn_local(async move {
            state.loading.set(true);
            state.load_error.set(None);

            match api::fetch_activities().await {
                Ok(activities) => {
                    state.set_activities(activities);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load activities: {}", e).into(),
                    );
                    state
                        .load_error
                        .set(Some("Unable to load activities.".to_string()));
                }
            }

            state.loading.set(false);
        });
    };

    // Fetch on mount
    let load_on_mount = load_activities.clone();
    create_effect(move |_| {
        load_on_mount();
    });

    // A confirmed signup refetches the collection from the server
    let load_after_signup = load_activities;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Activities"</h1>
                <p class="text-gray-400 mt-1">"Browse clubs and sign up with your email"</p>
            </div>

            // Activity cards
            <section>
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view()
                    } else if let Some(msg) = state.load_error.get() {
                        view! {
                            <div class="bg-gray-800 rounded-xl p-6 text-center">
                                <p class="text-red-400">{msg}</p>
                            </div>
                        }.into_view()
                    } else {
                        let activities = state.activities.get();
                        if activities.is_empty() {
                            view! {
                                <div class="text-center py-12">
                                    <p class="text-gray-400">"No activities available yet."</p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {activities.into_iter().map(|activity| {
                                        view! { <ActivityCard activity=activity /> }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </section>

            // Signup form
            <section class="bg-gray-800 rounded-xl p-6 max-w-xl">
                <h2 class="text-xl font-semibold mb-4">"Sign Up"</h2>
                <SignupForm on_success=load_after_signup />
            </section>
        </div>
    }
}
