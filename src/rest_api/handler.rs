//! # Query Gateway
//!
//! Translates each route into a statement, runs it against the store and
//! classifies the outcome: rows, no rows, or failure.

use std::sync::Arc;

use tracing::error;

use crate::store::{Column, Direction, RowStore, Statement, Table};

use super::errors::{RestError, RestResult};
use super::filter::{DishFilter, RestaurantFilter};
use super::response::RowsResponse;

/// Route-level operations over the restaurant and dish tables
pub struct QueryGateway {
    store: Arc<dyn RowStore>,
}

impl QueryGateway {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// Execute a statement. Zero rows is reported as `NotFound` with the
    /// lazily built message; store failures become `Execution`.
    async fn run(
        &self,
        route: &'static str,
        statement: Statement,
        not_found: impl FnOnce() -> String,
    ) -> RestResult<RowsResponse> {
        let rows = self.store.fetch_rows(&statement).await.map_err(|err| {
            error!(route, error = %err, "statement failed");
            RestError::Execution(err)
        })?;

        if rows.is_empty() {
            return Err(RestError::NotFound(not_found()));
        }

        Ok(RowsResponse::new(statement.table(), rows))
    }

    pub async fn list_restaurants(&self) -> RestResult<RowsResponse> {
        self.run(
            "list_restaurants",
            Statement::select_all(Table::Restaurants),
            || "No restaurants found".to_string(),
        )
        .await
    }

    pub async fn restaurant_by_id(&self, id: &str) -> RestResult<RowsResponse> {
        let statement =
            Statement::select_all(Table::Restaurants).filter_eq(Column::Id, Some(id.to_string()));
        self.run("restaurant_by_id", statement, || {
            format!("No restaurants found by ID: {}", id)
        })
        .await
    }

    pub async fn restaurants_by_cuisine(&self, cuisine: &str) -> RestResult<RowsResponse> {
        let statement = Statement::select_all(Table::Restaurants)
            .filter_eq(Column::Cuisine, Some(cuisine.to_string()));
        self.run("restaurants_by_cuisine", statement, || {
            format!("No restaurants found with cuisine: {}", cuisine)
        })
        .await
    }

    pub async fn filter_restaurants(&self, filter: &RestaurantFilter) -> RestResult<RowsResponse> {
        self.run("filter_restaurants", filter.to_statement(), || {
            filter.not_found_message()
        })
        .await
    }

    pub async fn restaurants_sorted_by_rating(&self) -> RestResult<RowsResponse> {
        let statement =
            Statement::select_all(Table::Restaurants).order_by(Column::Rating, Direction::Desc);
        self.run("restaurants_sorted_by_rating", statement, || {
            "No restaurants found".to_string()
        })
        .await
    }

    pub async fn list_dishes(&self) -> RestResult<RowsResponse> {
        self.run(
            "list_dishes",
            Statement::select_all(Table::Dishes),
            || "No dishes found".to_string(),
        )
        .await
    }

    pub async fn dish_by_id(&self, id: &str) -> RestResult<RowsResponse> {
        let statement =
            Statement::select_all(Table::Dishes).filter_eq(Column::Id, Some(id.to_string()));
        self.run("dish_by_id", statement, || format!("No dishes found by ID {}", id))
            .await
    }

    pub async fn filter_dishes(&self, filter: &DishFilter) -> RestResult<RowsResponse> {
        self.run("filter_dishes", filter.to_statement(), || {
            filter.not_found_message()
        })
        .await
    }

    pub async fn dishes_sorted_by_price(&self) -> RestResult<RowsResponse> {
        let statement =
            Statement::select_all(Table::Dishes).order_by(Column::Price, Direction::Asc);
        self.run("dishes_sorted_by_price", statement, || {
            "No dishes found".to_string()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Row, StoreError, StoreResult};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every statement and answers with a canned result
    struct ScriptedStore {
        rows: Vec<Row>,
        fail: bool,
        seen: Mutex<Vec<(String, Vec<Option<String>>)>>,
    }

    impl ScriptedStore {
        fn returning(rows: Vec<Row>) -> Self {
            Self {
                rows,
                fail: false,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                rows: Vec::new(),
                fail: true,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last(&self) -> (String, Vec<Option<String>>) {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl RowStore for ScriptedStore {
        async fn fetch_rows(&self, statement: &Statement) -> StoreResult<Vec<Row>> {
            self.seen.lock().unwrap().push((
                statement.sql(),
                statement.params().map(|p| p.map(str::to_owned)).collect(),
            ));
            if self.fail {
                return Err(StoreError::Query(sqlx::Error::PoolClosed));
            }
            Ok(self.rows.clone())
        }
    }

    fn row(value: serde_json::Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    fn gateway(store: &Arc<ScriptedStore>) -> QueryGateway {
        QueryGateway::new(store.clone())
    }

    #[tokio::test]
    async fn test_rows_are_wrapped_with_table() {
        let store = Arc::new(ScriptedStore::returning(vec![row(json!({"id": 1}))]));
        let response = gateway(&store).list_dishes().await.unwrap();

        assert_eq!(response.table, Table::Dishes);
        assert_eq!(response.rows.len(), 1);
        assert_eq!(store.last().0, "SELECT * FROM dishes");
    }

    #[tokio::test]
    async fn test_empty_result_is_not_found() {
        let store = Arc::new(ScriptedStore::returning(Vec::new()));
        let err = gateway(&store).restaurant_by_id("99").await.unwrap_err();

        assert!(matches!(err, RestError::NotFound(ref m) if m == "No restaurants found by ID: 99"));
        assert_eq!(
            store.last(),
            (
                "SELECT * FROM restaurants WHERE id = ?".to_string(),
                vec![Some("99".to_string())]
            )
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_execution_error() {
        let store = Arc::new(ScriptedStore::failing());
        let err = gateway(&store).dishes_sorted_by_price().await.unwrap_err();

        assert!(matches!(err, RestError::Execution(_)));
        assert_eq!(store.last().0, "SELECT * FROM dishes ORDER BY price ASC");
    }

    #[tokio::test]
    async fn test_not_found_messages() {
        let store = Arc::new(ScriptedStore::returning(Vec::new()));
        let gw = gateway(&store);

        let message = |r: RestResult<RowsResponse>| match r {
            Err(RestError::NotFound(m)) => m,
            other => panic!("expected not found, got {:?}", other.map(|r| r.rows.len())),
        };

        assert_eq!(message(gw.list_restaurants().await), "No restaurants found");
        assert_eq!(
            message(gw.restaurants_by_cuisine("Thai").await),
            "No restaurants found with cuisine: Thai"
        );
        assert_eq!(
            message(gw.restaurants_sorted_by_rating().await),
            "No restaurants found"
        );
        assert_eq!(message(gw.list_dishes().await), "No dishes found");
        assert_eq!(message(gw.dish_by_id("3").await), "No dishes found by ID 3");
        assert_eq!(
            message(gw.filter_dishes(&DishFilter { is_veg: None }).await),
            "No dishes found with isVeg: undefined"
        );
        assert_eq!(message(gw.dishes_sorted_by_price().await), "No dishes found");
    }

    #[tokio::test]
    async fn test_sorted_restaurants_statement() {
        let store = Arc::new(ScriptedStore::returning(vec![row(json!({"rating": 5}))]));
        gateway(&store).restaurants_sorted_by_rating().await.unwrap();

        assert_eq!(store.last().0, "SELECT * FROM restaurants ORDER BY rating DESC");
    }
}
