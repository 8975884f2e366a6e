mod common;

use std::sync::Arc;

use common::{MockSession, NoAuthHeader};
use mealmate_client::client::types::{
    CreateMealPlanItemRequest, MealSlot, SaveRecipeRequest, UpdateMealPlanItemRequest,
};
use mealmate_client::error::ErrorKind;
use mealmate_client::MealmateClient;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MealmateClient {
    MealmateClient::new(server.uri(), Arc::new(MockSession::with_token("tok")))
}

fn meal_plan_json() -> serde_json::Value {
    serde_json::json!({
        "id": "mp_1",
        "items": [
            {
                "id": "mpi_1",
                "day": 0,
                "mealSlot": "breakfast",
                "recipeId": "r_pancakes",
                "recipeTitle": "Pancakes",
                "servings": 2
            },
            {
                "id": "mpi_2",
                "day": 3,
                "mealSlot": "dinner",
                "recipeId": "r_tacos",
                "recipeTitle": "Tacos"
            }
        ]
    })
}

#[tokio::test]
async fn get_meal_plan_parses_days_and_slots() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/meal-plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(meal_plan_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let plan = client.get_meal_plan().await.expect("plan should parse");

    assert_eq!(plan.items.len(), 2);
    assert_eq!(plan.items[0].meal_slot, MealSlot::Breakfast);
    assert_eq!(plan.items[1].day, 3);
    assert_eq!(plan.items[1].servings, None);
}

#[tokio::test]
async fn add_meal_plan_item_sends_lowercase_slot() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/meal-plan/items"))
        .and(body_json(serde_json::json!({
            "recipeId": "r_tacos",
            "day": 3,
            "mealSlot": "dinner",
            "servings": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "mpi_9",
            "day": 3,
            "mealSlot": "dinner",
            "recipeId": "r_tacos",
            "recipeTitle": "Tacos",
            "servings": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = client
        .add_meal_plan_item(CreateMealPlanItemRequest {
            recipe_id: "r_tacos".to_string(),
            day: 3,
            meal_slot: MealSlot::Dinner,
            servings: Some(4),
        })
        .await
        .expect("item should be created");

    assert_eq!(item.id, "mpi_9");
}

#[tokio::test]
async fn day_out_of_range_is_rejected_before_any_request() {
    common::init_test_logging();
    let server = MockServer::start().await;

    let client = client_for(&server);
    let err = client
        .add_meal_plan_item(CreateMealPlanItemRequest {
            recipe_id: "r_tacos".to_string(),
            day: 7,
            meal_slot: MealSlot::Dinner,
            servings: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = client
        .update_meal_plan_item(
            "mpi_1",
            UpdateMealPlanItemRequest { day: Some(9), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn remove_meal_plan_item_accepts_no_content() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/meal-plan/items/mpi_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.remove_meal_plan_item("mpi_1").await.expect("removal succeeds");
}

#[tokio::test]
async fn saved_recipe_search_encodes_the_query() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .and(query_param("query", "chicken soup"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "r_1", "title": "Chicken Soup", "ingredients": [], "instructions": [] }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let recipes = client
        .get_saved_recipes(Some("chicken soup"), Some(10))
        .await
        .expect("search should succeed");

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Chicken Soup");
}

#[tokio::test]
async fn get_recipe_works_for_guests() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/r_1"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "r_1",
            "title": "Chicken Soup",
            "ingredients": ["1 whole chicken", "2 carrots"],
            "instructions": ["Simmer for two hours."]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MealmateClient::new(server.uri(), Arc::new(MockSession::anonymous()));
    let recipe = client.get_recipe("r_1").await.expect("guests can view recipes");
    assert_eq!(recipe.ingredients.len(), 2);
}

#[tokio::test]
async fn save_recipe_requires_a_title() {
    common::init_test_logging();
    let server = MockServer::start().await;

    let client = client_for(&server);
    let err = client
        .save_recipe(SaveRecipeRequest {
            title: "".to_string(),
            description: None,
            ingredients: vec![],
            instructions: vec![],
            servings: None,
            tags: vec![],
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn delete_saved_recipe_accepts_no_content() {
    common::init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/recipes/r_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_saved_recipe("r_1").await.expect("deletion succeeds");
}
