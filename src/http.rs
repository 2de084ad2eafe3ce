//! HTTP transport for the catalog service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /pokemons?page&limit&search&type`: `{ "data": [...] }`
//! - `GET /pokemons/:pokemonId`: `{ "data": { pokemon, nextPokemon, previousPokemon } }`
//! - `POST /pokemons`: create, `{ "message": "Add successfully" }`
//! - `PUT /pokemons`: update, `{ "message": "Update successfully" }`
//! - `DELETE /pokemons/:pokemonId`: `{ "message": "Delete successfully" }`
//! - `GET /health`: `{ "ok": true }`
//!
//! Failures answer `{ "message": ... }` with the status from
//! [`CatalogError::status_code`].
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pokemon_catalog::{http, CatalogService, Config};
//!
//! let config = Config::from_env()?;
//! let service = Arc::new(CatalogService::new(config.store(), config.loader()));
//! http::serve(service, &config.bind_addr()).await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::service::{parse_id, CatalogError, CatalogService, ListQuery};
use crate::store::CatalogStore;
use crate::validation::PokemonInput;

type Shared<S> = State<Arc<CatalogService<S>>>;

/// Build an axum `Router` serving the catalog.
pub fn router<S: CatalogStore + 'static>(service: Arc<CatalogService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/pokemons",
            get(list_handler::<S>)
                .post(create_handler::<S>)
                .put(update_handler::<S>),
        )
        .route(
            "/pokemons/",
            get(list_handler::<S>)
                .post(create_handler::<S>)
                .put(update_handler::<S>),
        )
        .route(
            "/pokemons/:pokemon_id",
            get(get_handler::<S>).delete(delete_handler::<S>),
        )
        .with_state(service)
}

/// Serve the catalog over HTTP at `addr` (e.g. `"0.0.0.0:8000"`) until Ctrl-C.
pub async fn serve<S: CatalogStore + 'static>(
    service: Arc<CatalogService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "catalog server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn list_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Query(query): Query<ListQuery>,
) -> Response {
    respond(
        blocking(move || service.list(&query))
            .await
            .map(|data| json!({ "data": data })),
    )
}

async fn get_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Path(pokemon_id): Path<String>,
) -> Response {
    let id = match parse_id(&pokemon_id) {
        Ok(id) => id,
        Err(e) => return respond(Err(e)),
    };
    respond(
        blocking(move || service.get(id))
            .await
            .map(|detail| json!({ "data": detail })),
    )
}

async fn create_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let input = match decode(body) {
        Ok(input) => input,
        Err(e) => return respond(Err(e)),
    };
    respond(
        blocking(move || service.create(&input))
            .await
            .map(|_| json!({ "message": "Add successfully" })),
    )
}

async fn update_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let input = match decode(body) {
        Ok(input) => input,
        Err(e) => return respond(Err(e)),
    };
    respond(
        blocking(move || service.update(&input))
            .await
            .map(|_| json!({ "message": "Update successfully" })),
    )
}

async fn delete_handler<S: CatalogStore + 'static>(
    State(service): Shared<S>,
    Path(pokemon_id): Path<String>,
) -> Response {
    let id = match parse_id(&pokemon_id) {
        Ok(id) => id,
        Err(e) => return respond(Err(e)),
    };
    respond(
        blocking(move || service.delete(id))
            .await
            .map(|_| json!({ "message": "Delete successfully" })),
    )
}

/// Service calls block on file I/O and the catalog lock, so they run on
/// the blocking pool.
async fn blocking<T, F>(op: F) -> Result<T, CatalogError>
where
    F: FnOnce() -> Result<T, CatalogError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .unwrap_or_else(|e| Err(CatalogError::Worker(e.to_string())))
}

/// Bodies axum refuses (bad JSON, wrong content type) fail the same way
/// as bodies that do not fit the payload shape.
fn decode(body: Result<Json<Value>, JsonRejection>) -> Result<PokemonInput, CatalogError> {
    let Json(value) =
        body.map_err(|rejection| CatalogError::DecodeFailed(rejection.body_text()))?;
    Ok(serde_json::from_value(value)?)
}

fn respond(result: Result<Value, CatalogError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            if e.is_client_error() {
                warn!(error = %e, "request rejected");
            } else {
                error!(error = %e, "request failed");
            }
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "message": e.message() }))).into_response()
        }
    }
}
