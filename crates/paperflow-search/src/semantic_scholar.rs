//! Semantic Scholar Graph API client.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use paperflow_core::config::search::SearchConfig;
use paperflow_core::error::AppError;
use paperflow_core::result::AppResult;

use crate::types::{SearchHit, normalize_doi};

const BASE_URL: &str = "https://api.semanticscholar.org/graph/v1";
const FIELDS: &str = "paperId,title,abstract,year,authors,venue,citationCount,externalIds,openAccessPdf";

/// Client for the Semantic Scholar paper search API.
#[derive(Debug, Clone)]
pub struct SemanticScholarClient {
    http: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SemanticScholarPaper>,
}

/// Raw paper record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticScholarPaper {
    pub paper_id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub venue: Option<String>,
    #[serde(default)]
    pub citation_count: i64,
    pub external_ids: Option<ExternalIds>,
    pub open_access_pdf: Option<OpenAccessPdf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAccessPdf {
    pub url: Option<String>,
}

impl SemanticScholarClient {
    /// Create a new client from search configuration.
    pub fn new(http: reqwest::Client, config: &SearchConfig) -> Self {
        Self {
            http,
            api_key: config.semantic_scholar_api_key.clone(),
        }
    }

    /// Search for papers. Fails closed: any error yields an empty list.
    pub async fn search(&self, query: &str, limit: u32) -> Vec<SearchHit> {
        match self.fetch(query, limit).await {
            Ok(papers) => papers.into_iter().map(normalize).collect(),
            Err(e) => {
                warn!(error = %e, "Semantic Scholar search failed");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, query: &str, limit: u32) -> AppResult<Vec<SemanticScholarPaper>> {
        let limit = limit.to_string();
        let mut request = self
            .http
            .get(format!("{BASE_URL}/paper/search"))
            .query(&[
                ("query", query),
                ("limit", limit.as_str()),
                ("fields", FIELDS),
            ]);

        if !self.api_key.is_empty() {
            request = request.header("x-api-key", &self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Semantic Scholar request: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("Semantic Scholar status: {e}")))?
            .json::<SearchResponse>()
            .await
            .map_err(|e| AppError::external_service(format!("Semantic Scholar decode: {e}")))?;

        Ok(response.data)
    }
}

/// Map a raw record into the normalized hit shape.
fn normalize(paper: SemanticScholarPaper) -> SearchHit {
    SearchHit {
        id: paper.paper_id,
        title: paper.title.unwrap_or_default(),
        authors: paper.authors.into_iter().map(|a| a.name).collect(),
        abstract_text: paper.abstract_text,
        publication_date: paper.year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        venue: paper.venue.filter(|v| !v.is_empty()),
        doi: paper
            .external_ids
            .and_then(|ids| ids.doi)
            .map(|d| normalize_doi(&d)),
        citation_count: paper.citation_count,
        pdf_url: paper.open_access_pdf.and_then(|p| p.url),
        source: "Semantic Scholar".to_string(),
    }
}
