use serde_json::{Value, json};
use serial_test::serial;

use crate::test_utils::{assert_until_eq, start_test_server};

async fn sale_at_confirmation(client: &httpc_test::Client) -> String {
    let res = client
        .do_get("/catalog?search=CABO001")
        .await
        .expect("Catalog search should succeed.");
    let cable_id = res.json_body().expect("Body should be json.")[0]["id"]
        .as_str()
        .expect("Id should be a string.")
        .to_owned();

    let res = client
        .do_get("/customers")
        .await
        .expect("Customer list should succeed.");
    let customer_id = res.json_body().expect("Body should be json.")[0]["id"]
        .as_str()
        .expect("Customer id should be a string.")
        .to_owned();

    let res = client
        .do_post("/sales", json!({}))
        .await
        .expect("Opening a sale should succeed.");
    let sale_id = res.json_body().expect("Body should be json.")["sale_id"]
        .as_str()
        .expect("Sale id should be a string.")
        .to_owned();

    client
        .do_post(
            &format!("/sales/{sale_id}/items"),
            json!({ "product_id": cable_id }),
        )
        .await
        .expect("Adding the cable should succeed.");
    client
        .do_post(&format!("/sales/{sale_id}/next"), json!({}))
        .await
        .expect("Advancing should succeed.");
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
            json!({ "method": "pix" }),
        )
        .await
        .expect("Selecting PIX should succeed.");
    client
        .do_post(&format!("/sales/{sale_id}/next"), json!({}))
        .await
        .expect("Advancing should succeed.");

    sale_id
}

async fn signal_of(client: &httpc_test::Client, sale_id: &str) -> anyhow::Result<Option<String>> {
    let res = client.do_get(&format!("/sales/{sale_id}")).await?;
    let body: Value = res.json_body()?;
    Ok(body["signal"]["signal"].as_str().map(str::to_owned))
}

#[tokio::test]
#[serial]
async fn a_pix_payment_confirms_after_the_settlement_delay() {
    let (_server_handle, app_state) = start_test_server(|settings| {
        settings.checkout.settlement_delay_secs = 2;
    })
    .await;

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");
    let sale_id = sale_at_confirmation(&client).await;

    let res = client
        .do_post(&format!("/sales/{sale_id}/confirm"), json!({}))
        .await
        .expect("Confirming should succeed.");
    let confirmation = res.json_body().expect("Body should be json.");
    assert_eq!(confirmation["status"].as_str(), Some("awaiting_payment"));
    let payload = confirmation["pix"]["payload"]
        .as_str()
        .expect("A PIX payload should be present.")
        .to_owned();
    assert!(payload.starts_with("000201"));

    // The pending charge is visible while the countdown runs.
    let res = client
        .do_get(&format!("/sales/{sale_id}/settlement"))
        .await
        .expect("Settlement status should succeed.");
    let status = res.json_body().expect("Body should be json.");
    assert_eq!(status["pending"]["pix_payload"].as_str(), Some(payload.as_str()));

    assert_until_eq(
        || signal_of(&client, &sale_id),
        Some("payment_confirmed".to_owned()),
        "Waiting for the PIX payment to confirm",
    )
    .await;

    let res = client.do_get("/orders").await.expect("Order list should succeed.");
    let orders = res.json_body().expect("Body should be json.");
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
    assert_eq!(orders[0]["payment_method"].as_str(), Some("pix"));
}

#[tokio::test]
#[serial]
async fn an_unpaid_pix_charge_expires_and_reverts_the_sale() {
    let (_server_handle, app_state) = start_test_server(|settings| {
        settings.checkout.pix_timeout_secs = 1;
        settings.checkout.settlement_delay_secs = 10_000;
    })
    .await;

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");
    let sale_id = sale_at_confirmation(&client).await;

    client
        .do_post(&format!("/sales/{sale_id}/confirm"), json!({}))
        .await
        .expect("Confirming should succeed.");

    assert_until_eq(
        || signal_of(&client, &sale_id),
        Some("payment_expired".to_owned()),
        "Waiting for the PIX payment to expire",
    )
    .await;

    // The sale is back at item selection with its cart intact, and nothing
    // reached the order log.
    let res = client
        .do_get(&format!("/sales/{sale_id}"))
        .await
        .expect("Sale status should succeed.");
    let sale = res.json_body().expect("Body should be json.");
    assert_eq!(sale["stage"].as_str(), Some("selecting_items"));
    assert_eq!(sale["cart"]["lines"].as_array().map(Vec::len), Some(1));

    let res = client.do_get("/orders").await.expect("Order list should succeed.");
    let orders = res.json_body().expect("Body should be json.");
    assert_eq!(orders.as_array().map(Vec::len), Some(0));
}
