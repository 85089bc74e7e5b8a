//! Search fan-out across the external bibliographic providers.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use paperflow_core::error::AppError;
use paperflow_search::crossref::CrossrefClient;
use paperflow_search::openalex::OpenAlexClient;
use paperflow_search::semantic_scholar::SemanticScholarClient;
use paperflow_search::types::{SearchHit, SearchSource};
use paperflow_search::dedupe_hits;

use crate::context::RequestContext;

/// Merged, de-duplicated search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// The hits, capped at twice the requested per-provider limit.
    pub results: Vec<SearchHit>,
    /// Number of unique hits before the cap.
    pub total: usize,
}

/// Fans a query out to the selected providers and merges the results.
#[derive(Debug, Clone)]
pub struct SearchService {
    semantic_scholar: Arc<SemanticScholarClient>,
    openalex: Arc<OpenAlexClient>,
    crossref: Arc<CrossrefClient>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(
        semantic_scholar: Arc<SemanticScholarClient>,
        openalex: Arc<OpenAlexClient>,
        crossref: Arc<CrossrefClient>,
    ) -> Self {
        Self {
            semantic_scholar,
            openalex,
            crossref,
        }
    }

    /// Runs the query against every included provider concurrently, then
    /// de-duplicates by DOI-or-title and caps the result at `2 * limit`.
    ///
    /// Provider failures are absorbed by the clients (each fails closed with
    /// an empty list), so a dead provider degrades results instead of
    /// failing the request.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        query: &str,
        source: SearchSource,
        limit: u32,
    ) -> Result<SearchResults, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Query is required"));
        }

        let (semantic, openalex, crossref) = tokio::join!(
            self.provider_results(SearchSource::SemanticScholar, source, query, limit),
            self.provider_results(SearchSource::Openalex, source, query, limit),
            self.provider_results(SearchSource::Crossref, source, query, limit),
        );

        let mut merged = semantic;
        merged.extend(openalex);
        merged.extend(crossref);

        let unique = dedupe_hits(merged);
        let total = unique.len();

        let capped: Vec<SearchHit> = unique
            .into_iter()
            .take((limit as usize).saturating_mul(2))
            .collect();

        info!(
            user_id = %ctx.user_id,
            query,
            source = %source,
            total,
            returned = capped.len(),
            "Search completed"
        );

        Ok(SearchResults {
            results: capped,
            total,
        })
    }

    async fn provider_results(
        &self,
        provider: SearchSource,
        selected: SearchSource,
        query: &str,
        limit: u32,
    ) -> Vec<SearchHit> {
        if !selected.includes(provider) {
            return Vec::new();
        }

        match provider {
            SearchSource::SemanticScholar => self.semantic_scholar.search(query, limit).await,
            SearchSource::Openalex => self.openalex.search(query, limit).await,
            SearchSource::Crossref => self.crossref.search(query, limit).await,
            SearchSource::All => Vec::new(),
        }
    }
}
