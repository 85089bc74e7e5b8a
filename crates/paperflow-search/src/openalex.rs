//! OpenAlex works API client.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use paperflow_core::config::search::SearchConfig;
use paperflow_core::error::AppError;
use paperflow_core::result::AppResult;

use crate::types::{SearchHit, normalize_doi};

const BASE_URL: &str = "https://api.openalex.org";

/// Client for the OpenAlex works search API.
#[derive(Debug, Clone)]
pub struct OpenAlexClient {
    http: reqwest::Client,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<OpenAlexWork>,
}

/// Raw work record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAlexWork {
    pub id: Option<String>,
    pub title: Option<String>,
    pub display_name: Option<String>,
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub authorships: Vec<Authorship>,
    pub primary_location: Option<Location>,
    #[serde(default)]
    pub cited_by_count: i64,
    pub doi: Option<String>,
    pub abstract_inverted_index: Option<HashMap<String, Vec<u32>>>,
    pub open_access: Option<OpenAccess>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Authorship {
    pub author: AuthorInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorInfo {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub source: Option<LocationSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationSource {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAccess {
    pub oa_url: Option<String>,
}

impl OpenAlexClient {
    /// Create a new client from search configuration.
    pub fn new(http: reqwest::Client, config: &SearchConfig) -> Self {
        Self {
            http,
            user_agent: format!("Paperflow (mailto:{})", config.openalex_email),
        }
    }

    /// Search for works. Fails closed: any error yields an empty list.
    pub async fn search(&self, query: &str, limit: u32) -> Vec<SearchHit> {
        match self.fetch(query, limit).await {
            Ok(works) => works.into_iter().map(normalize).collect(),
            Err(e) => {
                warn!(error = %e, "OpenAlex search failed");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, query: &str, limit: u32) -> AppResult<Vec<OpenAlexWork>> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(format!("{BASE_URL}/works"))
            .query(&[("search", query), ("per_page", limit.as_str())])
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("OpenAlex request: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("OpenAlex status: {e}")))?
            .json::<SearchResponse>()
            .await
            .map_err(|e| AppError::external_service(format!("OpenAlex decode: {e}")))?;

        Ok(response.results)
    }
}

/// Rebuild abstract text from OpenAlex's inverted word index.
pub fn reconstruct_abstract(inverted_index: &HashMap<String, Vec<u32>>) -> String {
    let mut words: Vec<(&str, u32)> = Vec::new();
    for (word, positions) in inverted_index {
        for &pos in positions {
            words.push((word.as_str(), pos));
        }
    }
    words.sort_by_key(|&(_, pos)| pos);
    words
        .into_iter()
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Map a raw record into the normalized hit shape.
fn normalize(work: OpenAlexWork) -> SearchHit {
    let title = work
        .display_name
        .or(work.title)
        .unwrap_or_default();

    SearchHit {
        id: work.id,
        title,
        authors: work
            .authorships
            .into_iter()
            .filter_map(|a| a.author.display_name)
            .collect(),
        abstract_text: work
            .abstract_inverted_index
            .as_ref()
            .map(reconstruct_abstract)
            .filter(|a| !a.is_empty()),
        publication_date: work
            .publication_year
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        venue: work
            .primary_location
            .and_then(|l| l.source)
            .and_then(|s| s.display_name),
        doi: work.doi.map(|d| normalize_doi(&d)),
        citation_count: work.cited_by_count,
        pdf_url: work.open_access.and_then(|oa| oa.oa_url),
        source: "OpenAlex".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_abstract_orders_by_position() {
        let mut index = HashMap::new();
        index.insert("world".to_string(), vec![1]);
        index.insert("hello".to_string(), vec![0]);
        index.insert("again".to_string(), vec![2]);

        assert_eq!(reconstruct_abstract(&index), "hello world again");
    }

    #[test]
    fn test_reconstruct_abstract_repeated_words() {
        let mut index = HashMap::new();
        index.insert("the".to_string(), vec![0, 2]);
        index.insert("more".to_string(), vec![1]);
        index.insert("merrier".to_string(), vec![3]);

        assert_eq!(reconstruct_abstract(&index), "the more the merrier");
    }
}
