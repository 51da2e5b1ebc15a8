use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::test_utils::start_test_server;

#[tokio::test]
#[serial]
async fn a_cash_sale_walks_every_step_into_the_order_log() {
    let (_server_handle, app_state) = start_test_server(|_| {}).await;

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");

    // Look up the seeded products by their codes.
    let res = client
        .do_get("/catalog?search=IP13PM256")
        .await
        .expect("Catalog search should succeed.");
    let phone = res.json_body().expect("Body should be json.");
    let phone_id = phone[0]["id"].as_str().expect("Id should be a string.").to_owned();
    assert_eq!(phone[0]["unit_price"].as_str(), Some("4200.00"));

    let res = client
        .do_get("/catalog?search=CABO001")
        .await
        .expect("Catalog search should succeed.");
    let cable = res.json_body().expect("Body should be json.");
    let cable_id = cable[0]["id"].as_str().expect("Id should be a string.").to_owned();

    // Open the sale and build the cart: one phone, two cables.
    let res = client
        .do_post("/sales", json!({}))
        .await
        .expect("Opening a sale should succeed.");
    let sale_id = res.json_body().expect("Body should be json.")["sale_id"]
        .as_str()
        .expect("Sale id should be a string.")
        .to_owned();

    let res = client
        .do_post(
            &format!("/sales/{sale_id}/items"),
            json!({ "product_id": phone_id }),
        )
        .await
        .expect("Adding the phone should succeed.");
    assert_eq!(res.status(), StatusCode::OK);

    client
        .do_post(
            &format!("/sales/{sale_id}/items"),
            json!({ "product_id": cable_id }),
        )
        .await
        .expect("Adding the cable should succeed.");
    let res = client
        .do_post(
            &format!("/sales/{sale_id}/quantity"),
            json!({ "product_id": cable_id, "quantity": 2 }),
        )
        .await
        .expect("Setting the quantity should succeed.");
    let cart = res.json_body().expect("Body should be json.");
    assert_eq!(cart["subtotal"].as_str(), Some("4250.00"));

    // Walk the steps: customer, payment, confirmation.
    let res = client
        .do_post(&format!("/sales/{sale_id}/next"), json!({}))
        .await
        .expect("Advancing should succeed.");
    assert_eq!(
        res.json_body().expect("Body should be json.").as_str(),
        Some("selecting_customer")
    );

    let res = client
        .do_get("/customers?search=Joao")
        .await
        .expect("Customer search should succeed.");
    let customer_id = res.json_body().expect("Body should be json.")[0]["id"]
        .as_str()
        .expect("Customer id should be a string.")
        .to_owned();
    client
        .do_post(
            &format!("/sales/{sale_id}/customer"),
            json!({ "customer_id": customer_id }),
        )
        .await
        .expect("Selecting a customer should succeed.");
    client
        .do_post(&format!("/sales/{sale_id}/next"), json!({}))
        .await
        .expect("Advancing should succeed.");

    client
        .do_post(
            &format!("/sales/{sale_id}/payment"),
            json!({ "method": "cash" }),
        )
        .await
        .expect("Selecting a payment method should succeed.");
    client
        .do_post(&format!("/sales/{sale_id}/next"), json!({}))
        .await
        .expect("Advancing should succeed.");

    let res = client
        .do_post(&format!("/sales/{sale_id}/confirm"), json!({}))
        .await
        .expect("Confirming should succeed.");
    let confirmation = res.json_body().expect("Body should be json.");
    assert_eq!(confirmation["status"].as_str(), Some("confirmed"));
    assert_eq!(confirmation["total"].as_str(), Some("4250.00"));
    assert!(confirmation["pix"].is_null());
    let order_id = confirmation["order_id"]
        .as_str()
        .expect("Order id should be a string.")
        .to_owned();
    assert!(
        confirmation["whatsapp_handoff"]
            .as_str()
            .expect("Handoff should be a string.")
            .starts_with("https://wa.me/")
    );

    // The order is queryable afterwards.
    let res = client
        .do_get(&format!("/orders/{order_id}"))
        .await
        .expect("Order lookup should succeed.");
    let order = res.json_body().expect("Body should be json.");
    assert_eq!(order["payment_method"].as_str(), Some("cash"));
    assert_eq!(order["total"].as_str(), Some("4250.00"));
    assert_eq!(order["customer"]["name"].as_str(), Some("Joao Silva"));

    let res = client.do_get("/orders").await.expect("Order list should succeed.");
    let orders = res.json_body().expect("Body should be json.");
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[serial]
async fn guards_block_skipping_steps() {
    let (_server_handle, app_state) = start_test_server(|_| {}).await;

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");

    let res = client
        .do_post("/sales", json!({}))
        .await
        .expect("Opening a sale should succeed.");
    let sale_id = res.json_body().expect("Body should be json.")["sale_id"]
        .as_str()
        .expect("Sale id should be a string.")
        .to_owned();

    // An empty cart cannot advance, and a premature confirm is rejected.
    let res = client
        .do_post(&format!("/sales/{sale_id}/next"), json!({}))
        .await
        .expect("Request should complete.");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .do_post(&format!("/sales/{sale_id}/confirm"), json!({}))
        .await
        .expect("Request should complete.");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // An unknown sale is a 404.
    let unknown = uuid::Uuid::now_v7();
    let res = client
        .do_get(&format!("/sales/{unknown}"))
        .await
        .expect("Request should complete.");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
