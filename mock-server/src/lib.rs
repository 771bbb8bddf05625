use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub host_id: Uuid,
    pub location_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Canned data served by the `/mock/*` routes.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub events: Vec<Event>,
    pub users: Vec<User>,
    pub locations: Vec<Location>,
}

impl Fixtures {
    /// A small, fixed data set. Ids and timestamps never change between runs.
    pub fn seed() -> Self {
        let dave = Uuid::from_u128(0x1);
        let ana = Uuid::from_u128(0x2);
        let rooftop = Uuid::from_u128(0x101);
        let warehouse = Uuid::from_u128(0x102);

        let users = vec![
            User {
                id: dave,
                name: "Dave".to_string(),
                email: "dave@example.com".to_string(),
            },
            User {
                id: ana,
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
            },
        ];

        let locations = vec![
            Location {
                id: rooftop,
                name: "Rooftop".to_string(),
                latitude: 37.7749,
                longitude: -122.4194,
            },
            Location {
                id: warehouse,
                name: "Warehouse".to_string(),
                latitude: 40.7128,
                longitude: -74.006,
            },
        ];

        let events = vec![
            Event {
                id: Uuid::from_u128(0x201),
                name: "Launch party".to_string(),
                host_id: dave,
                location_id: rooftop,
                starts_at: at(2020, 7, 5, 20),
                ends_at: at(2020, 7, 6, 2),
            },
            Event {
                id: Uuid::from_u128(0x202),
                name: "After the afterparty".to_string(),
                host_id: ana,
                location_id: warehouse,
                starts_at: at(2020, 7, 6, 2),
                ends_at: at(2020, 7, 6, 6),
            },
        ];

        Self {
            events,
            users,
            locations,
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub type Db = Arc<Fixtures>;

pub fn app() -> Router {
    app_with(Fixtures::seed())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/hello", get(hello))
        .route("/hello/{name}", get(hello_name))
        .route("/mock/events", get(list_events))
        .route("/mock/users", get(list_users))
        .route("/mock/locations", get(list_locations))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> Json<String> {
    Json("Hello World".to_string())
}

async fn hello_name(Path(name): Path<String>) -> Json<String> {
    tracing::debug!(%name, "greeting");
    Json(format!("Hello {name}"))
}

async fn list_events(State(db): State<Db>) -> Json<Vec<Event>> {
    Json(db.events.clone())
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.users.clone())
}

async fn list_locations(State(db): State<Db>) -> Json<Vec<Location>> {
    Json(db.locations.clone())
}
