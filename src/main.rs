use std::env;
use std::sync::Arc;

use mealmate_client::client::auth::StaticSession;
use mealmate_client::MealmateClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let base_url =
        env::var("MEALMATE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let token = env::var("MEALMATE_TOKEN").ok();

    if token.is_none() {
        tracing::warn!("MEALMATE_TOKEN is not set; grocery list access requires a session token");
    }

    let session = Arc::new(StaticSession::new(token));
    let client = MealmateClient::new(base_url.clone(), session);

    tracing::info!("Fetching grocery list from {}", base_url);
    let list = match client.get_grocery_list().await {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("Failed to fetch grocery list: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - MEALMATE_BASE_URL is correct: {}", base_url);
            tracing::error!("  - MEALMATE_TOKEN holds a valid session token");
            tracing::error!("  - the Mealmate backend is running and accessible");
            tracing::error!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Grocery list has {} meals and {} custom items",
        list.meals.len(),
        list.custom_items.len()
    );

    let categories = list.aggregated();
    if categories.is_empty() {
        println!("Your grocery list is empty.");
        return Ok(());
    }

    for category in categories {
        println!("{} {}", category.emoji, category.name);
        for ingredient in category.ingredients {
            let recipes = ingredient
                .recipes
                .iter()
                .map(|r| r.title.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if ingredient.quantity.is_empty() {
                println!("  - {}", ingredient.name);
            } else {
                println!("  - {} ({})", ingredient.name, ingredient.quantity);
            }
            if !recipes.is_empty() {
                println!("    from: {}", recipes);
            }
        }
    }

    Ok(())
}
