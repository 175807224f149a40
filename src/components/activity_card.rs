//! Activity Card Component
//!
//! Displays a single activity with its participant roster.

use leptos::*;

use crate::api;
use crate::state::global::{Activity, GlobalState};

/// Card for one activity: description, remaining capacity and roster.
#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    let spots_left = activity.spots_left();
    let name = activity.name.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <h4 class="font-semibold text-lg">{name}</h4>
            <p class="text-gray-400 text-sm mt-1">{activity.description}</p>

            <p class="mt-2 text-sm">
                <span class="text-gray-400">"Availability: "</span>
                <span class="font-medium">{spots_left}" spots left"</span>
            </p>

            <Participants activity_name=activity.name participants=activity.participants />
        </div>
    }
}

/// Roster section: count badge plus either the participant list or the
/// empty-roster placeholder.
#[component]
fn Participants(activity_name: String, participants: Vec<String>) -> impl IntoView {
    let count = participants.len();

    view! {
        <div class="mt-4">
            <h5 class="text-sm font-semibold text-gray-300">
                "Participants "
                <span class="ml-1 bg-gray-700 text-xs px-2 py-0.5 rounded-full">
                    {count}
                </span>
            </h5>

            {if participants.is_empty() {
                view! {
                    <p class="text-gray-500 text-sm mt-2">"No participants yet."</p>
                }.into_view()
            } else {
                view! {
                    <ul class="mt-2 space-y-1">
                        {participants.into_iter().map(|email| {
                            view! {
                                <ParticipantRow
                                    activity_name=activity_name.clone()
                                    email=email
                                />
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}

/// One roster entry with its remove button.
///
/// A confirmed unregister patches the roster locally instead of refetching;
/// a failure leaves the roster untouched and only raises an error toast.
#[component]
fn ParticipantRow(activity_name: String, email: String) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (removing, set_removing) = create_signal(false);

    let activity_for_request = activity_name;
    let email_for_request = email.clone();
    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if removing.get() {
            return;
        }
        set_removing.set(true);

        let state_clone = state.clone();
        let activity = activity_for_request.clone();
        let email = email_for_request.clone();
        spawn_local(async move {
            match api::unregister(&activity, &email).await {
                Ok(message) => {
                    state_clone.show_success(&message);
                    // The patch disposes this row; its signals must not be
                    // touched after this call.
                    state_clone.remove_participant(&activity, &email);
                }
                Err(e) => {
                    state_clone.show_error(&e);
                    set_removing.set(false);
                }
            }
        });
    };

    view! {
        <li class="flex items-center justify-between bg-gray-700/50 rounded px-3 py-1.5">
            <span class="text-sm">{email}</span>
            <button
                title="Remove participant"
                disabled=move || removing.get()
                on:click=on_remove
                class="text-gray-400 hover:text-red-400 disabled:text-gray-600 transition-colors"
            >
                "✖"
            </button>
        </li>
    }
}
