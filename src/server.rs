use crate::aggregator::Aggregator;
use crate::model::{AggregateError, AggregateResponse};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub index_page: Bytes,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/ajax", get(ajax_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Server listening on: http://{}", addr);
    axum::serve(listener, create_app(state)).await
}

async fn index_handler(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.index_page.clone())
}

async fn ajax_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match state.aggregator.aggregate(first_query(&params)).await {
        Ok(items) => Json(AggregateResponse { amazon_items: items }).into_response(),
        Err(AggregateError::EmptyQuery) => StatusCode::BAD_REQUEST.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// First `query` value, or `""` when absent. Repeats are ignored.
fn first_query(params: &[(String, String)]) -> &str {
    params
        .iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}
