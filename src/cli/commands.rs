//! CLI command implementations
//!
//! The store is opened before the listener binds; if it cannot be opened the
//! process exits without accepting traffic.

use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::rest_api::QueryGateway;
use crate::store::{SqliteStore, Table};

use super::args::{CheckArgs, Command, ServeArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Run a parsed command on a single-threaded runtime
pub fn run_command(command: Command) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match command {
            Command::Serve(args) => serve(args).await,
            Command::Check(args) => check(args).await,
        }
    })
}

/// Open the store and serve the query API until shutdown
pub async fn serve(args: ServeArgs) -> CliResult<()> {
    let mut config = Config::resolve(args.config.as_deref())?;
    config.apply_serve_args(&args);
    init_logging(config.log_format);

    let store = SqliteStore::connect(&config.store)
        .await
        .map_err(|e| CliError::store_unavailable(e.to_string()))?;

    let gateway = Arc::new(QueryGateway::new(Arc::new(store.clone())));
    let server = HttpServer::new(config.http.clone(), gateway);

    let result = server
        .start()
        .await
        .map_err(|e| CliError::serve_failed(format!("{} ({})", e, config.http.socket_addr())));

    store.close().await;
    result
}

/// Open the store and print the row count of each table
pub async fn check(args: CheckArgs) -> CliResult<()> {
    let mut config = Config::resolve(args.config.as_deref())?;
    config.apply_check_args(&args);
    init_logging(config.log_format);

    let store = SqliteStore::connect(&config.store)
        .await
        .map_err(|e| CliError::store_unavailable(e.to_string()))?;

    for table in [Table::Restaurants, Table::Dishes] {
        let count = store
            .count_rows(table)
            .await
            .map_err(|e| CliError::store_unavailable(format!("{}: {}", table, e)))?;
        info!(%table, rows = count, "table checked");
        println!("{}: {} rows", table, count);
    }

    store.close().await;
    Ok(())
}
