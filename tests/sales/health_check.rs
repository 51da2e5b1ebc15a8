use axum::http::StatusCode;
use serial_test::serial;

use crate::test_utils::start_test_server;

#[tokio::test]
#[serial]
async fn the_webserver_responds_to_a_simple_get_request() {
    let (_server_handle, app_state) = start_test_server(|_| {}).await;

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");
    let res = client
        .do_get("/healthcheck")
        .await
        .expect("Health check should succeed.");

    assert_eq!(res.status(), StatusCode::OK);
}
