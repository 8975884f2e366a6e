#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use mealmate_client::client::auth::SessionProvider;
use mealmate_client::error::{ApiError, Result};
use mealmate_client::telemetry::{ErrorReporter, RequestContext};

/// Scripted session provider for exercising the client's auth paths.
pub struct MockSession {
    token: Mutex<Option<String>>,
    refresh_to: Option<String>,
    pub refresh_calls: AtomicU32,
}

impl MockSession {
    /// Session with a valid token that never needs refreshing.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            refresh_to: None,
            refresh_calls: AtomicU32::new(0),
        }
    }

    /// Session with no token at all (guest).
    pub fn anonymous() -> Self {
        Self {
            token: Mutex::new(None),
            refresh_to: None,
            refresh_calls: AtomicU32::new(0),
        }
    }

    /// Session whose token the server will reject, but which can refresh
    /// to a new one.
    pub fn refreshing(initial: &str, refreshed: &str) -> Self {
        Self {
            token: Mutex::new(Some(initial.to_string())),
            refresh_to: Some(refreshed.to_string()),
            refresh_calls: AtomicU32::new(0),
        }
    }

    /// Session whose token the server will reject and whose refresh fails.
    pub fn expired(initial: &str) -> Self {
        Self {
            token: Mutex::new(Some(initial.to_string())),
            refresh_to: None,
            refresh_calls: AtomicU32::new(0),
        }
    }

    pub fn refresh_count(&self) -> u32 {
        self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for MockSession {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.lock().expect("token lock").clone())
    }

    async fn refresh(&self) -> Result<Option<String>> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        match &self.refresh_to {
            Some(new_token) => {
                *self.token.lock().expect("token lock") = Some(new_token.clone());
                Ok(Some(new_token.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Reporter that records every terminal error it sees.
#[derive(Default)]
pub struct CapturingReporter {
    reports: Mutex<Vec<(String, String, String)>>,
}

impl CapturingReporter {
    pub fn reports(&self) -> Vec<(String, String, String)> {
        self.reports.lock().expect("reports lock").clone()
    }

    pub fn count(&self) -> usize {
        self.reports.lock().expect("reports lock").len()
    }
}

impl ErrorReporter for CapturingReporter {
    fn report(&self, error: &ApiError, context: &RequestContext) {
        self.reports.lock().expect("reports lock").push((
            context.method.to_string(),
            context.url.clone(),
            error.to_string(),
        ));
    }
}

/// Wiremock matcher for requests that must NOT carry credentials.
pub struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Grocery list response body used across tests.
pub fn grocery_list_json() -> serde_json::Value {
    serde_json::json!({
        "id": "gl_1",
        "meals": [
            {
                "mealPlanItemId": "mpi_1",
                "recipeId": "r_pancakes",
                "recipeTitle": "Pancakes",
                "ingredients": ["2 cups flour", "1 egg", "1 cup milk"],
                "day": 0,
                "mealSlot": "breakfast"
            },
            {
                "mealPlanItemId": "mpi_2",
                "recipeId": "r_waffles",
                "recipeTitle": "Waffles",
                "ingredients": ["1 cup flour", "2 eggs"],
                "day": 1,
                "mealSlot": "breakfast"
            }
        ],
        "customItems": [
            {
                "id": "ci_1",
                "name": "Paper towels",
                "quantity": "2 rolls",
                "checked": false
            }
        ],
        "createdAt": "2025-06-01T08:00:00Z",
        "updatedAt": "2025-06-02T08:00:00Z"
    })
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
