//! Signup Form Component
//!
//! Form for signing an email up for an activity.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Signup form: email input plus activity selector.
///
/// `on_success` runs after a confirmed signup so the board can refresh the
/// collection from the server.
#[component]
pub fn SignupForm(on_success: impl Fn() + Clone + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (activity, set_activity) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let em = email.get().trim().to_string();
        let act = activity.get();

        // Validate before any request goes out
        if em.is_empty() || act.is_empty() {
            state.show_error("Please provide an email and select an activity.");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let on_success = on_success.clone();
        spawn_local(async move {
            match api::signup(&act, &em).await {
                Ok(message) => {
                    state_clone.show_success(&message);
                    set_email.set(String::new());
                    set_activity.set(String::new());
                    on_success();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Email
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Activity selector
            <ActivitySelector activity=activity set_activity=set_activity />

            // Submit button
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>
    }
}

#[component]
fn ActivitySelector(
    activity: ReadSignal<String>,
    set_activity: WriteSignal<String>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Activity"</label>
            <select
                on:change=move |ev| set_activity.set(event_target_value(&ev))
                prop:value=move || activity.get()
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"-- Select an activity --"</option>

                // One option per activity, kept in sync with the board
                {move || {
                    state.activities.get()
                        .into_iter()
                        .map(|a| view! {
                            <option value=a.name.clone()>{a.name}</option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
