mod common;
use common::{create_test_app, spawn_test_app, TestAppClient};
use reqwest::StatusCode;
use todo_backend::HealthzResponse;

#[tokio::test]
async fn healthz_returns_ok_message() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client.healthz().await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<HealthzResponse>().await.unwrap();
    assert_eq!(body.message, "OK");
}
