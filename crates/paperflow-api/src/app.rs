//! Application builder: wires repositories, services, and the router into
//! a running Axum server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;

use paperflow_ai::Summarizer;
use paperflow_auth::jwt::decoder::JwtDecoder;
use paperflow_auth::jwt::encoder::JwtEncoder;
use paperflow_auth::password::hasher::PasswordHasher;
use paperflow_auth::password::validator::PasswordValidator;
use paperflow_core::config::AppConfig;
use paperflow_core::error::AppError;

use paperflow_database::repositories::annotation::AnnotationRepository;
use paperflow_database::repositories::citation::CitationRepository;
use paperflow_database::repositories::collection::CollectionRepository;
use paperflow_database::repositories::insight::InsightRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_database::repositories::user::UserRepository;

use paperflow_search::crossref::CrossrefClient;
use paperflow_search::openalex::OpenAlexClient;
use paperflow_search::semantic_scholar::SemanticScholarClient;

use paperflow_service::activity::ActivityService;
use paperflow_service::annotation::AnnotationService;
use paperflow_service::citation::CitationService;
use paperflow_service::collection::{CollectionService, TreeService};
use paperflow_service::insight::InsightService;
use paperflow_service::paper::{PaperService, PdfService};
use paperflow_service::search::SearchService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from prepared state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the full application state: storage, auth, HTTP clients,
/// repositories, and services.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Infrastructure ───────────────────────────────────────
    let storage = paperflow_storage::from_config(&config.storage).await?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.search.request_timeout_seconds))
        .build()
        .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

    let summarizer = Arc::new(Summarizer::new(http_client.clone(), config.ai.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));

    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let paper_repo = Arc::new(PaperRepository::new(db_pool.clone()));
    let collection_repo = Arc::new(CollectionRepository::new(db_pool.clone()));
    let annotation_repo = Arc::new(AnnotationRepository::new(db_pool.clone()));
    let insight_repo = Arc::new(InsightRepository::new(db_pool.clone()));
    let citation_repo = Arc::new(CitationRepository::new(db_pool.clone()));

    // ── External search clients ──────────────────────────────
    let semantic_scholar = Arc::new(SemanticScholarClient::new(
        http_client.clone(),
        &config.search,
    ));
    let openalex = Arc::new(OpenAlexClient::new(http_client.clone(), &config.search));
    let crossref = Arc::new(CrossrefClient::new(http_client));

    // ── Services ─────────────────────────────────────────────
    let paper_service = Arc::new(PaperService::new(
        Arc::clone(&paper_repo),
        Arc::clone(&annotation_repo),
        Arc::clone(&insight_repo),
    ));
    let pdf_service = Arc::new(PdfService::new(
        Arc::clone(&paper_repo),
        Arc::clone(&storage),
        config.storage.clone(),
    ));
    let collection_service = Arc::new(CollectionService::new(
        Arc::clone(&collection_repo),
        Arc::clone(&paper_repo),
    ));
    let tree_service = Arc::new(TreeService::new(Arc::clone(&collection_repo)));
    let annotation_service = Arc::new(AnnotationService::new(
        Arc::clone(&annotation_repo),
        Arc::clone(&paper_repo),
    ));
    let insight_service = Arc::new(InsightService::new(
        Arc::clone(&insight_repo),
        Arc::clone(&paper_repo),
    ));
    let citation_service = Arc::new(CitationService::new(
        Arc::clone(&citation_repo),
        Arc::clone(&paper_repo),
    ));
    let search_service = Arc::new(SearchService::new(semantic_scholar, openalex, crossref));
    let activity_service = Arc::new(ActivityService::new(
        Arc::clone(&paper_repo),
        Arc::clone(&insight_repo),
        Arc::clone(&collection_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        storage,
        summarizer,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        password_validator,
        user_repo,
        paper_repo,
        collection_repo,
        annotation_repo,
        insight_repo,
        citation_repo,
        paper_service,
        pdf_service,
        collection_service,
        tree_service,
        annotation_service,
        insight_service,
        citation_service,
        search_service,
        activity_service,
    })
}

/// Runs the Paperflow server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let shutdown_grace = config.server.shutdown_grace_seconds;

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "Paperflow listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_grace))
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal(grace_seconds: u64) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(grace_seconds, "Shutdown signal received, draining connections");
}
