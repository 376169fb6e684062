// Shared setup for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use stockroom_client::{ClientConfig, OneshotHttpClient};
use stockroom_mock::{MockState, RecordedRequest};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("stockroom_client=debug")
        .try_init();
}

pub fn config() -> ClientConfig {
    ClientConfig::new("http://mock.local").with_search_debounce(Duration::from_millis(500))
}

/// Mock backend plus an in-process client talking to it
pub fn setup(state: MockState) -> (MockState, Arc<OneshotHttpClient>) {
    init_tracing();
    let client = OneshotHttpClient::new(stockroom_mock::router(state.clone())).with_token("test-token");
    (state, Arc::new(client))
}

/// GET requests to `path`, oldest first
pub async fn gets(state: &MockState, path: &str) -> Vec<RecordedRequest> {
    state
        .requests()
        .await
        .into_iter()
        .filter(|r| r.method == "GET" && r.path == path)
        .collect()
}
