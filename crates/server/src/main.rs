use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use shared::{
    error::ErrorCode,
    protocol::{CalcTimesQuery, CalcTimesResponse, CalcTimesResult, CALC_TIMES_ROUTE},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const CALC_PAGE: &str = include_str!("../templates/calc.html");
const NOT_FOUND_PAGE: &str = include_str!("../templates/404.html");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::from_settings(&settings);
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, debug = settings.debug, "brevet calculator listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index", get(index))
        .route("/healthz", get(healthz))
        .route(CALC_TIMES_ROUTE, get(http_calc_times))
        .fallback(page_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    debug!("main page entry");
    Html(CALC_PAGE)
}

async fn page_not_found() -> (StatusCode, Html<&'static str>) {
    debug!("page not found");
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_calc_times(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CalcTimesQuery>, QueryRejection>,
) -> Json<CalcTimesResponse> {
    let result = match query {
        Ok(Query(query)) => {
            debug!(km = ?query.km, ?query, "got a JSON request");
            api::calc_times(&query, state.defaults)
        }
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "malformed calculator query");
            CalcTimesResult::failed(ErrorCode::InvalidInput)
        }
    };
    Json(CalcTimesResponse { result })
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
