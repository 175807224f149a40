//! Global Application State
//!
//! Reactive state management using Leptos signals. The activity collection
//! held here is the single source of truth for the rendered board: badges,
//! spots-left labels and roster lists all derive from it, so a patch or a
//! full replacement updates every dependent view at once.

use leptos::*;

/// How long a transient status message stays visible, in milliseconds.
const MESSAGE_TIMEOUT_MS: u32 = 4_000;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Activities from the API, sorted by name
    pub activities: RwSignal<Vec<Activity>>,
    /// Full refresh in flight
    pub loading: RwSignal<bool>,
    /// Last full-refresh failure, shown in place of the board
    pub load_error: RwSignal<Option<String>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// An activity offering with its participant roster
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub max_participants: u32,
    /// Participant emails, in server order
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Never negative, even for an over-full roster.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }

    /// Drop `email` from the roster. Returns false if it was not present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        activities: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        load_error: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Replace the whole collection after a full refresh.
    pub fn set_activities(&self, activities: Vec<Activity>) {
        self.activities.set(activities);
        self.load_error.set(None);
    }

    /// Local patch after a successful unregister: drop `email` from the
    /// named activity's roster. The count badge and the spots-left label
    /// follow by derivation. Returns whether anything changed.
    pub fn remove_participant(&self, activity: &str, email: &str) -> bool {
        let mut changed = false;
        self.activities.update(|activities| {
            if let Some(found) = activities.iter_mut().find(|a| a.name == activity) {
                changed = found.remove_participant(email);
            }
        });
        changed
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(MESSAGE_TIMEOUT_MS, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(MESSAGE_TIMEOUT_MS, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity {
            name: "Chess Club".to_string(),
            description: "Weekly matches and strategy practice".to_string(),
            max_participants: 10,
            participants: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        }
    }

    #[test]
    fn test_spots_left() {
        assert_eq!(chess_club().spots_left(), 8);
    }

    #[test]
    fn test_spots_left_never_negative() {
        let mut activity = chess_club();
        activity.max_participants = 1;
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn test_remove_participant_shrinks_roster() {
        let mut activity = chess_club();
        assert!(activity.remove_participant("a@x.com"));
        assert_eq!(activity.participants, vec!["b@x.com".to_string()]);
        assert_eq!(activity.spots_left(), 9);
    }

    #[test]
    fn test_remove_unknown_participant_is_noop() {
        let mut activity = chess_club();
        assert!(!activity.remove_participant("missing@x.com"));
        assert_eq!(activity.participants.len(), 2);
        assert_eq!(activity.spots_left(), 8);
    }

    #[test]
    fn test_remove_last_participant_empties_roster() {
        let mut activity = chess_club();
        assert!(activity.remove_participant("a@x.com"));
        assert!(activity.remove_participant("b@x.com"));
        assert!(activity.participants.is_empty());
        assert_eq!(activity.spots_left(), 10);
    }
}
