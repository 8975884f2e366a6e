//! # Mealmate HTTP Client
//!
//! This module provides the HTTP client for the Mealmate API, handling
//! sessions, resilient request delivery, and the grocery-list, meal-plan,
//! and recipe resources.
//!
//! ## Modules
//!
//! - [`auth`] - Session provider seam and per-request auth modes
//! - [`http`] - Request core: timeout, token attachment, 401 refresh,
//!   backoff retry, response decoding
//! - [`client`] - Typed methods for every API resource
//! - [`types`] - Request and response types
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use mealmate_client::client::auth::StaticSession;
//! use mealmate_client::MealmateClient;
//!
//! # async fn example() -> mealmate_client::error::Result<()> {
//! let session = Arc::new(StaticSession::new(Some("token".to_string())));
//! let client = MealmateClient::new("http://localhost:3000", session);
//!
//! // Fetch the grocery list and print its categorized view
//! let list = client.get_grocery_list().await?;
//! for category in list.aggregated() {
//!     println!("{} {}", category.emoji, category.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod http;
pub mod types;

pub use client::MealmateClient;
pub use http::{ApiClient, Payload, RequestOptions};
pub use types::*;
