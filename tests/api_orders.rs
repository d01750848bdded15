mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use campus_food::db::OrderOperations;
use campus_food::AppState;
use serde_json::{json, Value};

#[actix_rt::test]
async fn place_order_stores_order_and_clears_cart() {
    let (pool, fixtures, _guard) = common::setup_pool_with_fixtures();
    let app = common::init_app(AppState::from_pool(pool.clone(), common::TEST_STATIC_PREFIX)).await;
    let mut cookie = common::sign_in_as(&app, fixtures.user_id, "User One").await;

    let burrito = fixtures.menu_item_ids[0];
    let salad = fixtures.menu_item_ids[1];
    for (item_id, name, price) in [(burrito, "Veggie Burrito", 8.5), (salad, "Caesar Salad", 7.75)] {
        let req = test::TestRequest::post()
            .uri("/add_to_cart")
            .cookie(cookie.clone())
            .set_json(json!({ "item_id": item_id, "name": name, "price": price }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        cookie = common::session_cookie(&resp).expect("cart cookie");
    }

    let req = test::TestRequest::post()
        .uri("/place_order")
        .cookie(cookie)
        .set_json(json!({ "location": "Lucas Hall", "cart_items": [burrito, salad] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = common::session_cookie(&resp).expect("cleared cart cookie");
    let body: Value = test::read_body_json(resp).await;

    // 7 minutes transit plus 10 minutes preparation, no surcharge for two items.
    assert_eq!(body["delivery_time"], 17);
    let token = body["order_id"].as_str().expect("order id").to_string();
    let suffix = format!("-{}", fixtures.user_id);
    assert!(token.starts_with("ORD-"));
    assert!(token.ends_with(&suffix));
    assert_eq!(token.len(), "ORD-".len() + 8 + suffix.len());

    let (order, items) = OrderOperations::new(pool)
        .get_order_by_token(&token)
        .expect("stored order");
    assert_eq!(order.user_id, fixtures.user_id);
    assert_eq!(order.location, "Lucas Hall");
    assert_eq!(order.total_price, 16.25);
    assert_eq!(order.estimated_delivery_time, 17);
    assert_eq!(items.len(), 2);

    let req = test::TestRequest::get()
        .uri("/cart_total")
        .cookie(cookie)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 0.0);
}

#[actix_rt::test]
async fn place_order_with_unknown_item_writes_nothing() {
    let (pool, fixtures, _guard) = common::setup_pool_with_fixtures();
    let app = common::init_app(AppState::from_pool(pool.clone(), common::TEST_STATIC_PREFIX)).await;
    let cookie = common::sign_in_as(&app, fixtures.user_id, "User One").await;

    let req = test::TestRequest::post()
        .uri("/place_order")
        .cookie(cookie)
        .set_json(json!({
            "location": "scdi",
            "cart_items": [fixtures.menu_item_ids[0], 424242]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert!(body.get("order_id").is_none());

    let orders = OrderOperations::new(pool)
        .get_orders_by_user(fixtures.user_id)
        .expect("list orders");
    assert!(orders.is_empty());
}

#[actix_rt::test]
async fn bigger_orders_take_longer() {
    let (pool, fixtures, _guard) = common::setup_pool_with_fixtures();
    let app = common::init_app(AppState::from_pool(pool, common::TEST_STATIC_PREFIX)).await;
    let cookie = common::sign_in_as(&app, fixtures.user_id, "User One").await;
    let cold_brew = fixtures.menu_item_ids[2];

    let req = test::TestRequest::post()
        .uri("/place_order")
        .cookie(cookie)
        .set_json(json!({
            "location": "Kenna Hall",
            "cart_items": [cold_brew, cold_brew, cold_brew, cold_brew, cold_brew]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["delivery_time"], 23);
}
