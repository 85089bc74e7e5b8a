//! Crossref works API client.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use paperflow_core::error::AppError;
use paperflow_core::result::AppResult;

use crate::types::{SearchHit, normalize_doi};

const BASE_URL: &str = "https://api.crossref.org";

/// Client for the Crossref works search API.
#[derive(Debug, Clone)]
pub struct CrossrefClient {
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    items: Vec<CrossrefWork>,
}

/// Raw work record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CrossrefWork {
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(default)]
    pub author: Vec<CrossrefAuthor>,
    #[serde(rename = "published-print")]
    pub published_print: Option<DateParts>,
    #[serde(rename = "container-title", default)]
    pub container_title: Vec<String>,
    #[serde(rename = "is-referenced-by-count", default)]
    pub is_referenced_by_count: i64,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub link: Vec<CrossrefLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrossrefAuthor {
    pub given: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateParts {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Vec<Vec<i32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrossrefLink {
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "content-type")]
    pub content_type: Option<String>,
}

impl CrossrefClient {
    /// Create a new client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Search for works. Fails closed: any error yields an empty list.
    pub async fn search(&self, query: &str, limit: u32) -> Vec<SearchHit> {
        match self.fetch(query, limit).await {
            Ok(works) => works.into_iter().map(normalize).collect(),
            Err(e) => {
                warn!(error = %e, "Crossref search failed");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, query: &str, limit: u32) -> AppResult<Vec<CrossrefWork>> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(format!("{BASE_URL}/works"))
            .query(&[("query", query), ("rows", limit.as_str())])
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Crossref request: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("Crossref status: {e}")))?
            .json::<SearchResponse>()
            .await
            .map_err(|e| AppError::external_service(format!("Crossref decode: {e}")))?;

        Ok(response.message.items)
    }
}

/// Turn `[year, month?, day?]` date parts into a date, defaulting missing
/// parts to 1.
fn parse_date_parts(parts: &DateParts) -> Option<NaiveDate> {
    let first = parts.date_parts.first()?;
    let year = *first.first()?;
    let month = first.get(1).copied().unwrap_or(1) as u32;
    let day = first.get(2).copied().unwrap_or(1) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Map a raw record into the normalized hit shape.
fn normalize(work: CrossrefWork) -> SearchHit {
    let authors = work
        .author
        .iter()
        .map(|a| {
            format!(
                "{} {}",
                a.given.as_deref().unwrap_or(""),
                a.family.as_deref().unwrap_or("")
            )
            .trim()
            .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect();

    let pdf_url = work
        .link
        .iter()
        .find(|l| l.content_type.as_deref() == Some("application/pdf"))
        .and_then(|l| l.url.clone());

    let doi = work.doi.map(|d| normalize_doi(&d));

    SearchHit {
        id: doi.clone(),
        title: work.title.first().cloned().unwrap_or_default(),
        authors,
        abstract_text: work.abstract_text,
        publication_date: work.published_print.as_ref().and_then(parse_date_parts),
        venue: work.container_title.first().cloned(),
        doi,
        citation_count: work.is_referenced_by_count,
        pdf_url,
        source: "Crossref".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_parts_full() {
        let parts = DateParts {
            date_parts: vec![vec![2021, 6, 15]],
        };
        assert_eq!(
            parse_date_parts(&parts),
            NaiveDate::from_ymd_opt(2021, 6, 15)
        );
    }

    #[test]
    fn test_parse_date_parts_year_only() {
        let parts = DateParts {
            date_parts: vec![vec![2019]],
        };
        assert_eq!(parse_date_parts(&parts), NaiveDate::from_ymd_opt(2019, 1, 1));
    }

    #[test]
    fn test_parse_date_parts_empty() {
        let parts = DateParts { date_parts: vec![] };
        assert_eq!(parse_date_parts(&parts), None);
    }
}
