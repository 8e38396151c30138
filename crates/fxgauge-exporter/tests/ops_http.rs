//! Operational endpoints over a real listener.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use fxgauge_exporter::{app_state::AppState, router};

use fixtures::serve;

#[tokio::test]
async fn metrics_endpoint_serves_text_exposition() {
    let state = AppState::new();
    state
        .metrics()
        .exchange_rate
        .set(&[("code", "USD"), ("name", "US Dollar")], 90.0);
    let addr = serve(router::build_router(state)).await;

    let resp = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let ctype = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(ctype.starts_with("text/plain; version=0.0.4"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("# TYPE exchange_rate gauge"));
    assert!(body.contains("exchange_rate{code=\"USD\",name=\"US Dollar\"} 90"));
}

#[tokio::test]
async fn readiness_follows_draining() {
    let state = AppState::new();
    let addr = serve(router::build_router(state.clone())).await;

    let health = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(health.status(), 200);

    let ready = reqwest::get(format!("http://{addr}/readyz")).await.unwrap();
    assert_eq!(ready.status(), 200);

    state.set_draining();
    let ready = reqwest::get(format!("http://{addr}/readyz")).await.unwrap();
    assert_eq!(ready.status(), 503);
    assert_eq!(ready.text().await.unwrap(), "draining");

    let metrics = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();
    assert!(metrics.text().await.unwrap().contains("fxgauge_draining 1"));
}
