//! HTTP API Client
//!
//! Functions for communicating with the activity sign-up REST API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::global::Activity;

/// Default API base URL: same origin as the page that served the app
pub const DEFAULT_API_BASE: &str = "";

/// Storage key for the base-URL override
const API_BASE_STORAGE_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Wire form of one activity; the list endpoint returns a map keyed by name.
#[derive(Debug, serde::Deserialize)]
pub struct ActivityDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

/// Flatten the name-keyed wire map into a render-ready collection.
///
/// Object key order does not survive deserialization, so the collection is
/// sorted by name for a deterministic board.
fn activities_from_map(map: HashMap<String, ActivityDetails>) -> Vec<Activity> {
    let mut activities: Vec<Activity> = map
        .into_iter()
        .map(|(name, details)| Activity {
            name,
            description: details.description,
            max_participants: details.max_participants,
            participants: details.participants,
        })
        .collect();
    activities.sort_by(|a, b| a.name.cmp(&b.name));
    activities
}

fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/unregister?email={}",
        base,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

// ============ API Functions ============

/// Fetch the activity collection
pub async fn fetch_activities() -> Result<Vec<Activity>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/activities", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned {}", response.status()));
    }

    let result: HashMap<String, ActivityDetails> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(activities_from_map(result))
}

/// Sign an email up for an activity. Returns the server's confirmation text.
pub async fn signup(activity: &str, email: &str) -> Result<String, String> {
    let url = signup_url(&get_api_base(), activity, email);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Signup failed".to_string(),
        });
        return Err(error.detail);
    }

    let result: MutationResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message.unwrap_or_else(|| "Signed up!".to_string()))
}

/// Remove an email from an activity's roster. Returns the server's
/// confirmation text.
pub async fn unregister(activity: &str, email: &str) -> Result<String, String> {
    let url = unregister_url(&get_api_base(), activity, email);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Failed to remove participant".to_string(),
        });
        return Err(error.detail);
    }

    let result: MutationResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result
        .message
        .unwrap_or_else(|| format!("Unregistered {}", email)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_urls_encode_name_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "ann+test@x.com"),
            "/activities/Chess%20Club/signup?email=ann%2Btest%40x.com"
        );
        assert_eq!(
            unregister_url("http://localhost:8000", "Gym Class", "bob@x.com"),
            "http://localhost:8000/activities/Gym%20Class/unregister?email=bob%40x.com"
        );
    }

    #[test]
    fn test_decode_activity_collection() {
        let body = r#"{
            "Chess Club": {
                "description": "Weekly matches and strategy practice",
                "max_participants": 10,
                "participants": ["a@x.com", "b@x.com"]
            }
        }"#;
        let map: HashMap<String, ActivityDetails> = serde_json::from_str(body).unwrap();
        let activities = activities_from_map(map);

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Chess Club");
        assert_eq!(activities[0].participants.len(), 2);
        assert_eq!(activities[0].spots_left(), 8);
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let body = r#"{"Drop-in Gym": {}}"#;
        let map: HashMap<String, ActivityDetails> = serde_json::from_str(body).unwrap();
        let activities = activities_from_map(map);

        assert_eq!(activities[0].description, "");
        assert_eq!(activities[0].max_participants, 0);
        assert!(activities[0].participants.is_empty());
        assert_eq!(activities[0].spots_left(), 0);
    }

    #[test]
    fn test_collection_sorted_by_name() {
        let body = r#"{"Tennis": {}, "Art Club": {}, "Chess Club": {}}"#;
        let map: HashMap<String, ActivityDetails> = serde_json::from_str(body).unwrap();
        let names: Vec<String> = activities_from_map(map)
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(names, vec!["Art Club", "Chess Club", "Tennis"]);
    }
}
