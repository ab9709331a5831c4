//! Shared fixtures: an in-memory store seeded per test and helpers for
//! driving the router without binding a socket.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use restaurant_finder::http_server::{HttpServer, HttpServerConfig};
use restaurant_finder::rest_api::QueryGateway;
use restaurant_finder::store::SqliteStore;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

/// A restaurant row as stored in the fixture schema
pub struct RestaurantRow {
    pub id: i64,
    pub name: &'static str,
    pub cuisine: &'static str,
    pub rating: f64,
    pub is_veg: &'static str,
    pub has_outdoor_seating: &'static str,
    pub is_luxury: &'static str,
}

/// A dish row as stored in the fixture schema
pub struct DishRow {
    pub id: i64,
    pub name: &'static str,
    pub price: f64,
    pub is_veg: &'static str,
}

pub const RESTAURANTS: &[RestaurantRow] = &[
    RestaurantRow {
        id: 1,
        name: "Spice Kitchen",
        cuisine: "Indian",
        rating: 4.5,
        is_veg: "true",
        has_outdoor_seating: "true",
        is_luxury: "false",
    },
    RestaurantRow {
        id: 2,
        name: "Olive Bistro",
        cuisine: "Italian",
        rating: 4.1,
        is_veg: "false",
        has_outdoor_seating: "false",
        is_luxury: "true",
    },
    RestaurantRow {
        id: 3,
        name: "Green Leaf",
        cuisine: "Indian",
        rating: 4.8,
        is_veg: "true",
        has_outdoor_seating: "false",
        is_luxury: "false",
    },
    RestaurantRow {
        id: 4,
        name: "Sushi Stop",
        cuisine: "Japanese",
        rating: 3.9,
        is_veg: "false",
        has_outdoor_seating: "true",
        is_luxury: "true",
    },
];

pub const DISHES: &[DishRow] = &[
    DishRow {
        id: 1,
        name: "Paneer Butter Masala",
        price: 250.0,
        is_veg: "1",
    },
    DishRow {
        id: 2,
        name: "Chicken Tikka",
        price: 300.0,
        is_veg: "0",
    },
    DishRow {
        id: 3,
        name: "Veg Biryani",
        price: 180.0,
        is_veg: "1",
    },
];

/// One-connection in-memory pool; the database lives as long as the pool
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory store")
}

/// Create both tables, empty
pub async fn create_schema(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT,
            cuisine TEXT,
            rating REAL,
            isVeg TEXT,
            hasOutdoorSeating TEXT,
            isLuxury TEXT
        )",
    )
    .execute(pool)
    .await
    .expect("create restaurants");

    sqlx::query(
        "CREATE TABLE dishes (
            id INTEGER PRIMARY KEY,
            name TEXT,
            price REAL,
            isVeg INTEGER
        )",
    )
    .execute(pool)
    .await
    .expect("create dishes");
}

pub async fn insert_restaurants(pool: &SqlitePool, rows: &[RestaurantRow]) {
    for r in rows {
        sqlx::query("INSERT INTO restaurants VALUES (?, ?, ?, ?, ?, ?, ?)")
            .bind(r.id)
            .bind(r.name)
            .bind(r.cuisine)
            .bind(r.rating)
            .bind(r.is_veg)
            .bind(r.has_outdoor_seating)
            .bind(r.is_luxury)
            .execute(pool)
            .await
            .expect("insert restaurant");
    }
}

pub async fn insert_dishes(pool: &SqlitePool, rows: &[DishRow]) {
    for d in rows {
        sqlx::query("INSERT INTO dishes VALUES (?, ?, ?, ?)")
            .bind(d.id)
            .bind(d.name)
            .bind(d.price)
            .bind(d.is_veg)
            .execute(pool)
            .await
            .expect("insert dish");
    }
}

/// Schema plus the standard fixture rows
pub async fn seeded_pool() -> SqlitePool {
    let pool = memory_pool().await;
    create_schema(&pool).await;
    insert_restaurants(&pool, RESTAURANTS).await;
    insert_dishes(&pool, DISHES).await;
    pool
}

/// Router over `pool` with default HTTP settings
pub fn app(pool: SqlitePool) -> Router {
    app_with_config(pool, HttpServerConfig::default())
}

pub fn app_with_config(pool: SqlitePool, config: HttpServerConfig) -> Router {
    let store = Arc::new(SqliteStore::from_pool(pool));
    let gateway = Arc::new(QueryGateway::new(store));
    HttpServer::new(config, gateway).router()
}

/// Issue a GET and return status plus raw body
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

/// Issue a GET and parse the body as JSON
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

/// Field values of a named payload array
pub fn column<'a>(body: &'a Value, key: &str, field: &str) -> Vec<&'a Value> {
    body[key]
        .as_array()
        .expect("payload array")
        .iter()
        .map(|row| &row[field])
        .collect()
}
