//! UI Components
//!
//! Reusable Leptos components for the board.

pub mod activity_card;
pub mod loading;
pub mod nav;
pub mod signup_form;
pub mod toast;

pub use activity_card::ActivityCard;
pub use loading::CardSkeleton;
pub use nav::Nav;
pub use signup_form::SignupForm;
pub use toast::Toast;
