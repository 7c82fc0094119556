use crate::state::AppState;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use iet::catalog::NavItem;
use iet::landing::{render_landing, render_not_found, render_tool};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Paths the router owns itself; catalog routes may not claim them.
const RESERVED_PATHS: [&str; 3] = ["/", "/health", ASSETS_PATH];
const ASSETS_PATH: &str = "/assets";

/// Whether a catalog url would overlap a path the router registers itself.
pub(crate) fn is_reserved(url: &str) -> bool {
    RESERVED_PATHS.contains(&url) || url.starts_with("/assets/")
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
    routes: usize,
}

/// Builds the full router: landing page, one page per registered route, health, assets.
///
/// The route table is generated from `Registry::all_routes`, so adding a tool to the
/// catalog is enough to serve it.
pub(crate) fn init(state: AppState) -> Router {
    let routes = state.registry.all_routes();
    debug!(count = routes.len(), "Registering tool routes");

    let tools = routes.into_iter().fold(Router::<AppState>::new(), |router, item| {
        router.route(item.url, get(move |state: State<AppState>| tool_handler(state, item)))
    });

    Router::new()
        .route("/", get(landing_handler))
        .route("/health", get(health_handler))
        .merge(tools)
        .nest_service(ASSETS_PATH, ServeDir::new(&state.config.server.assets_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_landing(state.registry, &state.config.site))
}

async fn tool_handler(State(state): State<AppState>, item: &'static NavItem) -> Html<String> {
    Html(render_tool(state.registry, &state.config.site, item))
}

async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render_not_found(state.registry, &state.config.site, uri.path())))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.uptime(),
        routes: state.registry.all_routes().len(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
