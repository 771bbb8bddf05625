use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Event, Fixtures, Location, User};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- hello ---

#[tokio::test]
async fn hello_without_name() {
    let resp = app().oneshot(get("/hello")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let greeting: String = body_json(resp).await;
    assert_eq!(greeting, "Hello World");
}

#[tokio::test]
async fn hello_with_name() {
    let resp = app().oneshot(get("/hello/Dave")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], br#""Hello Dave""#);
}

#[tokio::test]
async fn hello_decodes_percent_encoded_name() {
    let resp = app().oneshot(get("/hello/Dave%20Okun")).await.unwrap();

    let greeting: String = body_json(resp).await;
    assert_eq!(greeting, "Hello Dave Okun");
}

// --- mock collections ---

#[tokio::test]
async fn mock_events_returns_seeded_events() {
    let resp = app().oneshot(get("/mock/events")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let events: Vec<Event> = body_json(resp).await;
    assert_eq!(events, Fixtures::seed().events);
}

#[tokio::test]
async fn mock_users_returns_seeded_users() {
    let resp = app().oneshot(get("/mock/users")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Dave");
}

#[tokio::test]
async fn mock_locations_returns_seeded_locations() {
    let resp = app().oneshot(get("/mock/locations")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let locations: Vec<Location> = body_json(resp).await;
    assert_eq!(locations, Fixtures::seed().locations);
}

#[tokio::test]
async fn custom_fixtures_are_served() {
    let fixtures = Fixtures {
        users: vec![User {
            id: uuid::Uuid::nil(),
            name: "Solo".to_string(),
            email: "solo@example.com".to_string(),
        }],
        ..Fixtures::default()
    };
    let app = app_with(fixtures);

    let users: Vec<User> = body_json(app.clone().oneshot(get("/mock/users")).await.unwrap()).await;
    assert_eq!(users.len(), 1);

    let events: Vec<Event> = body_json(app.oneshot(get("/mock/events")).await.unwrap()).await;
    assert!(events.is_empty());
}

// --- routing ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/mock/parties")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mock/users")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
