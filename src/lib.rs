//! # Mealmate Client Library
//!
//! This library is the service layer of the Mealmate meal-planning app: a
//! resilient HTTP client for the backend API and the grocery-list
//! aggregation logic that turns planned meals into a categorized shopping
//! list.
//!
//! ## Client Module
//!
//! The [`client`] module provides the typed API client, with per-request
//! auth modes, a single 401 refresh-and-retry, bounded timeouts, and
//! exponential backoff for transient failures.
//!
//! ## Grocery Module
//!
//! The [`grocery`] module merges ingredient lists from every selected
//! recipe (plus manually added items) into deduplicated, categorized
//! entries that keep track of which recipes contributed them.
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
//! let list = client.get_grocery_list().await?;
//! for category in list.aggregated() {
//!     println!("{} {} ({} items)", category.emoji, category.name, category.ingredients.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod grocery;
pub mod retry;
pub mod telemetry;

pub use client::MealmateClient;
pub use error::{ApiError, ErrorKind};
pub use retry::RetryPolicy;
