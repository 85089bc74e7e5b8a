//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use paperflow_ai::Summarizer;
use paperflow_auth::jwt::decoder::JwtDecoder;
use paperflow_auth::jwt::encoder::JwtEncoder;
use paperflow_auth::password::hasher::PasswordHasher;
use paperflow_auth::password::validator::PasswordValidator;
use paperflow_core::config::AppConfig;
use paperflow_storage::provider::StorageProvider;

use paperflow_database::repositories::annotation::AnnotationRepository;
use paperflow_database::repositories::citation::CitationRepository;
use paperflow_database::repositories::collection::CollectionRepository;
use paperflow_database::repositories::insight::InsightRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_database::repositories::user::UserRepository;

use paperflow_service::activity::ActivityService;
use paperflow_service::annotation::AnnotationService;
use paperflow_service::citation::CitationService;
use paperflow_service::collection::{CollectionService, TreeService};
use paperflow_service::insight::InsightService;
use paperflow_service::paper::{PaperService, PdfService};
use paperflow_service::search::SearchService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// PDF object store.
    pub storage: Arc<dyn StorageProvider>,
    /// AI summarizer backend.
    pub summarizer: Arc<Summarizer>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    pub password_validator: Arc<PasswordValidator>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Paper repository.
    pub paper_repo: Arc<PaperRepository>,
    /// Collection repository.
    pub collection_repo: Arc<CollectionRepository>,
    /// Annotation repository.
    pub annotation_repo: Arc<AnnotationRepository>,
    /// Insight repository.
    pub insight_repo: Arc<InsightRepository>,
    /// Citation repository.
    pub citation_repo: Arc<CitationRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Paper service.
    pub paper_service: Arc<PaperService>,
    /// PDF upload/retrieval service.
    pub pdf_service: Arc<PdfService>,
    /// Collection service.
    pub collection_service: Arc<CollectionService>,
    /// Collection tree service.
    pub tree_service: Arc<TreeService>,
    /// Annotation service.
    pub annotation_service: Arc<AnnotationService>,
    /// Insight service.
    pub insight_service: Arc<InsightService>,
    /// Citation service.
    pub citation_service: Arc<CitationService>,
    /// External search service.
    pub search_service: Arc<SearchService>,
    /// Activity feed service.
    pub activity_service: Arc<ActivityService>,
}
