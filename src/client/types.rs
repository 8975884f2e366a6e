//! Type definitions for the Mealmate API.
//!
//! This module contains the data structures exchanged with the backend,
//! including the grocery list, meal plan, and saved-recipe resources.
//! Field names are camelCase on the wire (the backend is a JS-style REST
//! service), so every type carries a `rename_all` attribute.
//!
//! ## Key Types
//!
//! - [`GroceryList`] - A user's grocery list: recipe-derived meals plus
//!   manually added items, with a recomputed-on-read aggregated view
//! - [`GroceryMeal`] - One recipe's ingredient contribution, keyed by the
//!   meal-plan item it came from
//! - [`CustomGroceryItem`] - A free-text item with its own lifecycle
//! - [`MealPlan`] - The weekly plan, day 0-6 (Sunday-first) by meal slot
//! - [`Recipe`] - A saved recipe snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grocery::{aggregate, CategoryIngredients};

/// A user's grocery list.
///
/// One list per user, created lazily by the backend on first access. The
/// categorized ingredient view is never stored here: [`GroceryList::aggregated`]
/// recomputes it from the current meals and custom items on every call, so
/// the view can never go stale against its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    /// Unique list identifier
    pub id: String,
    /// Recipe-derived ingredient contributions
    #[serde(default)]
    pub meals: Vec<GroceryMeal>,
    /// Manually added items
    #[serde(default)]
    pub custom_items: Vec<CustomGroceryItem>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GroceryList {
    /// Categorized, deduplicated view over the current meals and custom
    /// items. Pure derivation; call it again after any mutation.
    pub fn aggregated(&self) -> Vec<CategoryIngredients> {
        aggregate(&self.meals, &self.custom_items)
    }
}

/// A recipe's ingredient contribution to the grocery list.
///
/// Snapshot of the recipe (id, title, raw ingredient strings) taken when
/// the meal was added. Identity is `meal_plan_item_id`: adding the same
/// meal-plan item again replaces this entry rather than duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryMeal {
    /// Meal-plan item this contribution came from (identity)
    pub meal_plan_item_id: String,
    /// Recipe snapshot: id
    pub recipe_id: String,
    /// Recipe snapshot: title
    pub recipe_title: String,
    /// Recipe snapshot: raw ingredient strings
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Day of week (0-6, Sunday-first) of the originating slot
    #[serde(default)]
    pub day: Option<u8>,
    /// Meal slot of the originating slot
    #[serde(default)]
    pub meal_slot: Option<MealSlot>,
}

/// A manually added grocery item, independent of any recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomGroceryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

/// The weekly meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    #[serde(default)]
    pub items: Vec<MealPlanItem>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One planned meal: a recipe in a (day, slot) cell of the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanItem {
    pub id: String,
    /// Day of week, 0-6, Sunday-first
    pub day: u8,
    pub meal_slot: MealSlot,
    pub recipe_id: String,
    pub recipe_title: String,
    #[serde(default)]
    pub servings: Option<u32>,
}

/// Meal slot within a day. Lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A saved recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// Request types for creating/updating resources
// These types are serialized into request bodies; `None` fields are omitted
// so PATCH bodies stay partial.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGroceryMealsRequest {
    pub meal_plan_item_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomItemRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealPlanItemRequest {
    pub recipe_id: String,
    pub day: u8,
    pub meal_slot: MealSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealPlanItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_slot: Option<MealSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
