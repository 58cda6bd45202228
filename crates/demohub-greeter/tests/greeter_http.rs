//! End-to-end tests against the real router bound on an ephemeral port.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::Value;

use demohub_greeter::{app_state::AppState, config::GreeterConfig, router};

async fn spawn() -> String {
    let app = router::build_router(AppState::new(GreeterConfig::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn sample(body: &str, name: &str) -> Option<String> {
    body.lines()
        .find_map(|l| l.strip_prefix(name).and_then(|rest| rest.strip_prefix(' ')))
        .map(str::to_string)
}

#[tokio::test]
async fn greeting_payload() {
    let base = spawn().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Hello Rupesh!" }));
}

#[tokio::test]
async fn metrics_start_at_zero() {
    let base = spawn().await;
    let resp = reqwest::get(format!("{base}/metrics")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let ct = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(ct.starts_with("text/plain"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("# HELP http_requests_total Total HTTP requests\n"));
    assert!(body.contains("# TYPE http_requests_total counter\n"));
    assert_eq!(sample(&body, "http_requests_total").as_deref(), Some("0.0"));
    assert!(sample(&body, "http_requests_created").is_some());
}

#[tokio::test]
async fn greetings_are_counted_and_scrapes_are_not() {
    let base = spawn().await;
    for _ in 0..3 {
        reqwest::get(format!("{base}/")).await.unwrap();
    }
    // scraping twice must not move the counter
    reqwest::get(format!("{base}/metrics")).await.unwrap();
    let body = reqwest::get(format!("{base}/metrics")).await.unwrap().text().await.unwrap();

    assert_eq!(sample(&body, "http_requests_total").as_deref(), Some("3.0"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let base = spawn().await;
    let resp = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn metrics_include_process_families() {
    let base = spawn().await;
    let body = reqwest::get(format!("{base}/metrics")).await.unwrap().text().await.unwrap();

    for name in [
        "process_virtual_memory_bytes",
        "process_resident_memory_bytes",
        "process_start_time_seconds",
        "process_cpu_seconds_total",
        "process_open_fds",
        "process_max_fds",
    ] {
        assert!(sample(&body, name).is_some(), "missing {name}");
    }

    let start: f64 = sample(&body, "process_start_time_seconds").unwrap().parse().unwrap();
    let created: f64 = sample(&body, "http_requests_created").unwrap().parse().unwrap();
    assert!(start <= created + 1.0);

    // process families come before the request counter
    let process_at = body.find("# HELP process_").unwrap();
    let counter_at = body.find("# HELP http_requests_total").unwrap();
    assert!(process_at < counter_at);
}
