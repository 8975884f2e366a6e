//! Grocery list aggregation.
//!
//! Merges the ingredient lists of every meal on the grocery list, plus the
//! user's custom items, into one categorized shopping view. Pure transform
//! with no I/O and no caching: callers recompute whenever the underlying
//! meals or items change, so the view can never diverge from its inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::types::{CustomGroceryItem, GroceryMeal};
use crate::grocery::categories::{self, Category, CATEGORIES};
use crate::grocery::parse::{normalize_name, parse_ingredient};

/// Back-reference to a recipe that contributed an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub id: String,
    pub title: String,
}

/// One merged ingredient across every contributing recipe and custom item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedIngredient {
    /// Display name, taken from the first occurrence.
    pub name: String,
    /// Distinct contributed quantities, joined with ", ".
    pub quantity: String,
    /// Every recipe that contributed this ingredient, in first-seen order.
    pub recipes: Vec<RecipeRef>,
}

/// A display category with its merged ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryIngredients {
    pub name: String,
    pub emoji: String,
    pub ingredients: Vec<AggregatedIngredient>,
}

struct Entry {
    name: String,
    quantities: Vec<String>,
    recipes: Vec<RecipeRef>,
    category: &'static Category,
}

impl Entry {
    fn add_quantity(&mut self, quantity: &str) {
        if !quantity.is_empty() && !self.quantities.iter().any(|q| q == quantity) {
            self.quantities.push(quantity.to_string());
        }
    }

    fn add_recipe(&mut self, recipe: RecipeRef) {
        if !self.recipes.iter().any(|r| r.id == recipe.id) {
            self.recipes.push(recipe);
        }
    }
}

/// Merge `meals` and `custom_items` into categorized ingredients.
///
/// Two occurrences merge when their normalized names are equal (trimmed,
/// lowercased, whitespace-collapsed; literal match, no stemming).
/// Categories come out in fixed display order, ingredients within a
/// category in first-seen order. Empty input yields an empty list.
pub fn aggregate(
    meals: &[GroceryMeal],
    custom_items: &[CustomGroceryItem],
) -> Vec<CategoryIngredients> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for meal in meals {
        for raw in &meal.ingredients {
            let parsed = parse_ingredient(raw);
            let key = normalize_name(&parsed.name);
            if key.is_empty() {
                continue;
            }
            let recipe = RecipeRef {
                id: meal.recipe_id.clone(),
                title: meal.recipe_title.clone(),
            };
            match index.get(&key) {
                Some(&slot) => {
                    let entry = &mut entries[slot];
                    if let Some(quantity) = &parsed.quantity {
                        entry.add_quantity(quantity);
                    }
                    entry.add_recipe(recipe);
                }
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(Entry {
                        name: parsed.name.clone(),
                        quantities: parsed.quantity.into_iter().collect(),
                        recipes: vec![recipe],
                        category: categories::categorize(&key),
                    });
                }
            }
        }
    }

    for item in custom_items {
        let key = normalize_name(&item.name);
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&slot) => {
                if let Some(quantity) = &item.quantity {
                    entries[slot].add_quantity(quantity.trim());
                }
            }
            None => {
                // An explicit category overrides the keyword lookup, but
                // only when the custom item creates the entry.
                let category = item
                    .category
                    .as_deref()
                    .and_then(categories::by_name)
                    .unwrap_or_else(|| categories::categorize(&key));
                index.insert(key.clone(), entries.len());
                entries.push(Entry {
                    name: item.name.trim().to_string(),
                    quantities: item
                        .quantity
                        .iter()
                        .map(|q| q.trim().to_string())
                        .filter(|q| !q.is_empty())
                        .collect(),
                    recipes: Vec::new(),
                    category,
                });
            }
        }
    }

    CATEGORIES
        .iter()
        .filter_map(|category| {
            let ingredients: Vec<AggregatedIngredient> = entries
                .iter()
                .filter(|entry| entry.category.name == category.name)
                .map(|entry| AggregatedIngredient {
                    name: entry.name.clone(),
                    quantity: entry.quantities.join(", "),
                    recipes: entry.recipes.clone(),
                })
                .collect();
            if ingredients.is_empty() {
                None
            } else {
                Some(CategoryIngredients {
                    name: category.name.to_string(),
                    emoji: category.emoji.to_string(),
                    ingredients,
                })
            }
        })
        .collect()
}
