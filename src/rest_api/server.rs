//! # REST API Routes
//!
//! Axum routes for the restaurant and dish queries.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::errors::RestError;
use super::filter::{DishFilter, RestaurantFilter};
use super::handler::QueryGateway;
use super::response::RowsResponse;

/// Shared state type
type GatewayState = Arc<QueryGateway>;

type RowsResult = Result<Json<RowsResponse>, RestError>;

/// Build the query router
pub fn rest_routes(gateway: Arc<QueryGateway>) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/details/{id}", get(restaurant_by_id))
        .route("/restaurants/cuisine/{cuisine}", get(restaurants_by_cuisine))
        .route("/restaurants/filter", get(filter_restaurants))
        .route("/restaurants/sort-by-rating", get(restaurants_sorted_by_rating))
        .route("/dishes", get(list_dishes))
        .route("/dishes/details/{id}", get(dish_by_id))
        .route("/dishes/filter", get(filter_dishes))
        .route("/dishes/sort-by-price", get(dishes_sorted_by_price))
        .with_state(gateway)
}

async fn list_restaurants(State(gateway): State<GatewayState>) -> RowsResult {
    Ok(Json(gateway.list_restaurants().await?))
}

async fn restaurant_by_id(
    State(gateway): State<GatewayState>,
    Path(id): Path<String>,
) -> RowsResult {
    Ok(Json(gateway.restaurant_by_id(&id).await?))
}

async fn restaurants_by_cuisine(
    State(gateway): State<GatewayState>,
    Path(cuisine): Path<String>,
) -> RowsResult {
    Ok(Json(gateway.restaurants_by_cuisine(&cuisine).await?))
}

async fn filter_restaurants(
    State(gateway): State<GatewayState>,
    Query(query): Query<HashMap<String, String>>,
) -> RowsResult {
    let filter = RestaurantFilter::from_query(&query);
    Ok(Json(gateway.filter_restaurants(&filter).await?))
}

async fn restaurants_sorted_by_rating(State(gateway): State<GatewayState>) -> RowsResult {
    Ok(Json(gateway.restaurants_sorted_by_rating().await?))
}

async fn list_dishes(State(gateway): State<GatewayState>) -> RowsResult {
    Ok(Json(gateway.list_dishes().await?))
}

async fn dish_by_id(State(gateway): State<GatewayState>, Path(id): Path<String>) -> RowsResult {
    Ok(Json(gateway.dish_by_id(&id).await?))
}

async fn filter_dishes(
    State(gateway): State<GatewayState>,
    Query(query): Query<HashMap<String, String>>,
) -> RowsResult {
    let filter = DishFilter::from_query(&query);
    Ok(Json(gateway.filter_dishes(&filter).await?))
}

async fn dishes_sorted_by_price(State(gateway): State<GatewayState>) -> RowsResult {
    Ok(Json(gateway.dishes_sorted_by_price().await?))
}
