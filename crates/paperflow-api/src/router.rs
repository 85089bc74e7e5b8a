//! Route definitions for the Paperflow HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(paper_routes())
        .merge(collection_routes())
        .merge(insight_routes())
        .merge(citation_routes())
        .merge(search_routes())
        .merge(ai_routes())
        .merge(activity_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        // Allow headroom for multipart framing around the PDF itself.
        .layer(DefaultBodyLimit::max(max_upload + 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Paper CRUD plus nested annotations, PDFs, and citation history
fn paper_routes() -> Router<AppState> {
    Router::new()
        .route("/papers", get(handlers::paper::list_papers))
        .route("/papers", post(handlers::paper::create_paper))
        .route("/papers/{id}", get(handlers::paper::get_paper))
        .route("/papers/{id}", patch(handlers::paper::update_paper))
        .route("/papers/{id}", delete(handlers::paper::delete_paper))
        .route(
            "/papers/{id}/annotations",
            get(handlers::annotation::list_annotations),
        )
        .route(
            "/papers/{id}/annotations",
            post(handlers::annotation::create_annotation),
        )
        .route(
            "/papers/{id}/annotations/{annotation_id}",
            patch(handlers::annotation::update_annotation),
        )
        .route(
            "/papers/{id}/annotations/{annotation_id}",
            delete(handlers::annotation::delete_annotation),
        )
        .route("/papers/{id}/pdf", post(handlers::pdf::upload_pdf))
        .route("/papers/{id}/pdf", get(handlers::pdf::download_pdf))
        .route("/papers/{id}/pdf", delete(handlers::pdf::delete_pdf))
        .route("/papers/{id}/pdf-url", get(handlers::pdf::pdf_url))
        .route(
            "/papers/{id}/citations",
            get(handlers::citation::citation_history),
        )
}

/// Collection CRUD, tree, and paper associations
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(handlers::collection::list_collections))
        .route("/collections", post(handlers::collection::create_collection))
        .route("/collections/tree", get(handlers::collection::get_tree))
        .route("/collections/{id}", get(handlers::collection::get_collection))
        .route(
            "/collections/{id}",
            patch(handlers::collection::update_collection),
        )
        .route(
            "/collections/{id}",
            delete(handlers::collection::delete_collection),
        )
        .route(
            "/collections/{id}/papers",
            post(handlers::collection::add_paper),
        )
        .route(
            "/collections/{id}/papers/{paper_id}",
            delete(handlers::collection::remove_paper),
        )
}

/// Insight cards with nested todos and comments
fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/insights", get(handlers::insight::list_insights))
        .route("/insights", post(handlers::insight::create_insight))
        .route("/insights/{id}", patch(handlers::insight::update_insight))
        .route("/insights/{id}", delete(handlers::insight::delete_insight))
        .route("/insights/{id}/todos", get(handlers::insight::list_todos))
        .route("/insights/{id}/todos", post(handlers::insight::create_todo))
        .route(
            "/insights/{id}/todos/{todo_id}",
            patch(handlers::insight::update_todo),
        )
        .route(
            "/insights/{id}/todos/{todo_id}",
            delete(handlers::insight::delete_todo),
        )
        .route(
            "/insights/{id}/comments",
            get(handlers::insight::list_comments),
        )
        .route(
            "/insights/{id}/comments",
            post(handlers::insight::create_comment),
        )
        .route(
            "/insights/{id}/comments/{comment_id}",
            delete(handlers::insight::delete_comment),
        )
}

/// Citation generation
fn citation_routes() -> Router<AppState> {
    Router::new().route("/citations", post(handlers::citation::generate_citation))
}

/// External bibliographic search
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search))
}

/// AI summarization
fn ai_routes() -> Router<AppState> {
    Router::new().route("/ai/summarize", post(handlers::summarize::summarize))
}

/// Recent-activity feed
fn activity_routes() -> Router<AppState> {
    Router::new().route("/activity", get(handlers::activity::activity))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
