mod helpers;

use festivo_api_structs::{create_event, get_events, subscribe_newsletter, update_event};
use festivo_infra::{AppEnv, FestivoContext};
use helpers::setup::spawn_app;

#[actix_web::test]
async fn service_is_healthy() {
    let app = spawn_app(FestivoContext::create_inmemory()).await;

    let res = reqwest::get(format!("{}/", app.address))
        .await
        .expect("Expected server to be running");

    assert!(res.status().is_success());
    assert_eq!(res.text().await.unwrap(), "{\"message\":\"Ok!\\r\\n\"}");
}

#[actix_web::test]
async fn events_can_be_managed_over_the_api() {
    let app = spawn_app(FestivoContext::create_inmemory()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/events", app.address))
        .json(&serde_json::json!({
            "name": "Winter Gala",
            "date": 1772234700000i64,
            "category": "corporate"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let created: create_event::APIResponse = res.json().await.unwrap();
    assert_eq!(created.event.name, "Winter Gala");
    assert_eq!(created.event.category, "corporate");

    let res = client
        .get(format!("{}/events?category=corporate", app.address))
        .send()
        .await
        .unwrap();
    let listed: get_events::APIResponse = res.json().await.unwrap();
    assert_eq!(listed.events.len(), 1);

    let res = client
        .get(format!("{}/events?category=weddings", app.address))
        .send()
        .await
        .unwrap();
    let listed: get_events::APIResponse = res.json().await.unwrap();
    assert!(listed.events.is_empty());

    let res = client
        .put(format!("{}/events/{}", app.address, created.event.id))
        .json(&serde_json::json!({
            "description": "Black tie dinner with live band"
        }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    let updated: update_event::APIResponse = res.json().await.unwrap();
    assert_eq!(updated.event.description, "Black tie dinner with live band");
    assert_eq!(updated.event.name, "Winter Gala");

    let res = client
        .delete(format!("{}/events/{}", app.address, created.event.id))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let res = client
        .get(format!("{}/events/{}", app.address, created.event.id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn blank_event_names_are_rejected() {
    let app = spawn_app(FestivoContext::create_inmemory()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/events", app.address))
        .json(&serde_json::json!({
            "name": "   ",
            "date": 1772234700000i64
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn admin_routes_require_the_api_key_in_production() {
    let mut ctx = FestivoContext::create_inmemory();
    ctx.config.app_env = AppEnv::Production;
    ctx.config.admin_api_key = "admin-secret".into();
    let app = spawn_app(ctx).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/reminders", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/reminders", app.address))
        .header("x-api-key", "wrong-secret")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/reminders", app.address))
        .header("x-api-key", "admin-secret")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
}

#[actix_web::test]
async fn newsletter_subscription_lifecycle() {
    let app = spawn_app(FestivoContext::create_inmemory()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/newsletter/subscribe", app.address))
        .json(&serde_json::json!({
            "email": "  Karin@Example.COM ",
            "name": "Karin"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CREATED);
    let subscribed: subscribe_newsletter::APIResponse = res.json().await.unwrap();
    assert_eq!(subscribed.subscriber.email, "karin@example.com");

    // Same address again, however it is written
    let res = client
        .post(format!("{}/newsletter/subscribe", app.address))
        .json(&serde_json::json!({ "email": "karin@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::CONFLICT);

    let res = client
        .post(format!("{}/newsletter/unsubscribe", app.address))
        .json(&serde_json::json!({ "email": "karin@example.com" }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let res = client
        .post(format!("{}/newsletter/unsubscribe", app.address))
        .json(&serde_json::json!({ "email": "karin@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}
