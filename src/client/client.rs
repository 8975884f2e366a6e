use std::sync::Arc;

use crate::client::auth::SessionProvider;
use crate::client::http::{ApiClient, RequestOptions};
use crate::client::types::*;
use crate::error::{ApiError, Result};
use crate::retry::RetryPolicy;
use crate::telemetry::ErrorReporter;

/// Typed client for the Mealmate backend.
///
/// Wraps [`ApiClient`] with one method per resource endpoint. Grocery-list
/// and meal-plan endpoints require a signed-in session; recipe reads accept
/// guests.
pub struct MealmateClient {
    api: ApiClient,
}

impl MealmateClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionProvider>) -> Self {
        Self { api: ApiClient::new(base_url, session) }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.api = self.api.with_retry_policy(policy);
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.api = self.api.with_reporter(reporter);
        self
    }

    /// The underlying request core, for callers that need raw access.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // Grocery list operations

    /// Fetch the user's grocery list. The backend creates it lazily on
    /// first access, so this never 404s for a signed-in user.
    pub async fn get_grocery_list(&self) -> Result<GroceryList> {
        self.api.get_json("/grocery-list", RequestOptions::authed()).await
    }

    /// Remove every meal and custom item from the list.
    pub async fn clear_grocery_list(&self) -> Result<()> {
        self.api.delete_empty("/grocery-list", RequestOptions::authed()).await
    }

    /// Add the given meal-plan items' recipes to the grocery list. Adding
    /// an item that is already on the list replaces its contribution.
    pub async fn add_grocery_meals(&self, meal_plan_item_ids: Vec<String>) -> Result<GroceryList> {
        if meal_plan_item_ids.is_empty() {
            return Err(ApiError::validation("at least one meal plan item is required"));
        }
        let request = AddGroceryMealsRequest { meal_plan_item_ids };
        self.api
            .post_json("/grocery-list/meals", &request, RequestOptions::authed())
            .await
    }

    pub async fn remove_grocery_meal(&self, meal_plan_item_id: &str) -> Result<GroceryList> {
        let path = format!("/grocery-list/meals/{meal_plan_item_id}");
        self.api.delete_json(&path, RequestOptions::authed()).await
    }

    pub async fn add_custom_item(&self, request: CreateCustomItemRequest) -> Result<GroceryList> {
        if request.name.trim().is_empty() {
            return Err(ApiError::validation("item name is required"));
        }
        self.api
            .post_json("/grocery-list/items", &request, RequestOptions::authed())
            .await
    }

    pub async fn update_custom_item(
        &self,
        item_id: &str,
        request: UpdateCustomItemRequest,
    ) -> Result<GroceryList> {
        let path = format!("/grocery-list/items/{item_id}");
        self.api.patch_json(&path, &request, RequestOptions::authed()).await
    }

    pub async fn delete_custom_item(&self, item_id: &str) -> Result<()> {
        let path = format!("/grocery-list/items/{item_id}");
        self.api.delete_empty(&path, RequestOptions::authed()).await
    }

    // Meal plan operations

    pub async fn get_meal_plan(&self) -> Result<MealPlan> {
        self.api.get_json("/meal-plan", RequestOptions::authed()).await
    }

    /// Schedule a recipe into a (day, slot) cell. Day is 0-6, Sunday-first.
    pub async fn add_meal_plan_item(
        &self,
        request: CreateMealPlanItemRequest,
    ) -> Result<MealPlanItem> {
        if request.day > 6 {
            return Err(ApiError::validation("day must be between 0 and 6"));
        }
        self.api
            .post_json("/meal-plan/items", &request, RequestOptions::authed())
            .await
    }

    pub async fn update_meal_plan_item(
        &self,
        item_id: &str,
        request: UpdateMealPlanItemRequest,
    ) -> Result<MealPlanItem> {
        if let Some(day) = request.day {
            if day > 6 {
                return Err(ApiError::validation("day must be between 0 and 6"));
            }
        }
        let path = format!("/meal-plan/items/{item_id}");
        self.api.patch_json(&path, &request, RequestOptions::authed()).await
    }

    pub async fn remove_meal_plan_item(&self, item_id: &str) -> Result<()> {
        let path = format!("/meal-plan/items/{item_id}");
        self.api.delete_empty(&path, RequestOptions::authed()).await
    }

    // Recipe operations

    pub async fn get_saved_recipes(
        &self,
        query: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Recipe>> {
        let mut path = "/recipes".to_string();

        let mut params = vec![];
        if let Some(q) = query {
            params.push(format!("query={}", urlencoding::encode(q)));
        }
        if let Some(l) = limit {
            params.push(format!("limit={l}"));
        }

        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }

        self.api.get_json(&path, RequestOptions::authed()).await
    }

    /// Fetch a single recipe. Guests can view shared recipes, so the
    /// session is attached only when present.
    pub async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe> {
        let path = format!("/recipes/{recipe_id}");
        self.api.get_json(&path, RequestOptions::optional_auth()).await
    }

    pub async fn save_recipe(&self, request: SaveRecipeRequest) -> Result<Recipe> {
        if request.title.trim().is_empty() {
            return Err(ApiError::validation("recipe title is required"));
        }
        self.api.post_json("/recipes", &request, RequestOptions::authed()).await
    }

    pub async fn delete_saved_recipe(&self, recipe_id: &str) -> Result<()> {
        let path = format!("/recipes/{recipe_id}");
        self.api.delete_empty(&path, RequestOptions::authed()).await
    }
}
