use std::net::IpAddr;

use pretty_assertions::assert_eq;
use tablero_server::ApplicationSettings;
use tablero_server::projects::builtin_catalog;
use tablero_server::startup::Application;

const EXPECTED_BODY: &str = r##"[{"id":1,"title":"AI Image Gen","status":"Running","tech":"Python, React","url":"#"},{"id":2,"title":"Data Scraper Pro","status":"Stopped","tech":"FastAPI, Selenium","url":"#"}]"##;

async fn spawn_app() -> String {
    let configuration = ApplicationSettings::new(
        String::from("tablero"),
        String::from("test"),
        0,
        IpAddr::from([127, 0, 0, 1]),
        false,
    );

    let app = Application::build(&configuration, builtin_catalog())
        .await
        .expect("failed to bind the test server");

    let url = format!("http://{}:{}", app.host(), app.port());
    tokio::spawn(app.run_until_stopped());

    url
}

#[tokio::test]
async fn projects_returns_the_full_catalog_in_order() {
    let url = spawn_app().await;

    let response = reqwest::get(format!("{url}/api/projects"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.text().await.expect("body"), EXPECTED_BODY);
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let url = spawn_app().await;

    let first = reqwest::get(format!("{url}/api/projects"))
        .await
        .expect("request failed")
        .bytes()
        .await
        .expect("body");
    let second = reqwest::get(format!("{url}/api/projects"))
        .await
        .expect("request failed")
        .bytes()
        .await
        .expect("body");

    assert_eq!(first, second);
}

#[tokio::test]
async fn query_parameters_are_ignored() {
    let url = spawn_app().await;

    let with_query = reqwest::get(format!("{url}/api/projects?foo=bar"))
        .await
        .expect("request failed");

    assert_eq!(with_query.status(), 200);
    assert_eq!(with_query.text().await.expect("body"), EXPECTED_BODY);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let url = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{url}/api/projects"))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn cross_origin_requests_are_permitted() {
    let url = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{url}/api/projects"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("{url}/api/projects"))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .expect("preflight failed");

    assert!(preflight.status().is_success());
    assert_eq!(preflight.headers()["access-control-allow-origin"], "*");
    assert_eq!(preflight.headers()["access-control-allow-methods"], "GET");
}

#[tokio::test]
async fn health_check_answers_200() {
    let url = spawn_app().await;

    let response = reqwest::get(format!("{url}/api/health"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body"), "");
}
