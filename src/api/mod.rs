//! API Client
//!
//! HTTP communication with the activity sign-up service.

pub mod client;

pub use client::*;
