use std::{future::Future, time::Duration};

use lojix_server::{
    AppState, construct_app_state,
    infra::{Settings, get_config_settings},
    start_server,
};
use tokio::task::JoinHandle;

/// Asserts that a function returns an expected value or retries until it does.
/// Retries every 500ms if the values do not match.
/// Will fail immediately on an error or after 60 retries (30 seconds).
pub async fn assert_until_eq<F, Fut, T, E>(f: F, expected_value: T, label: &str)
where
    F: Fn() -> Fut,
    E: std::fmt::Debug,
    Fut: Future<Output = Result<T, E>>,
    T: PartialEq + std::fmt::Debug,
{
    let delay_ms = 500;
    let max_times = 60;
    let mut times: usize = 0;
    let mut result: T = f().await.unwrap();
    while times < max_times {
        times += 1;
        if result == expected_value {
            break;
        } else {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            println!("Retry #{times} {label}");
            result = f().await.unwrap();
        }
    }
    assert_eq!(result, expected_value);
}

pub async fn start_test_server(
    tweak_settings: impl FnOnce(&mut Settings),
) -> (JoinHandle<Result<(), anyhow::Error>>, AppState) {
    let mut settings = get_config_settings().expect("Could not read application configuration.");
    tweak_settings(&mut settings);
    let app_state = construct_app_state(settings);
    let server_handle = tokio::task::spawn(start_server(app_state.clone()));

    // Wait for the listener to come up before handing the state back.
    let address = app_state.settings.application.address();
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(&address).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    (server_handle, app_state)
}
