//! Common search result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized search hit from any provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Provider-native identifier (Semantic Scholar paper id, OpenAlex id,
    /// Crossref DOI).
    pub id: Option<String>,
    /// Paper title.
    pub title: String,
    /// Author names.
    pub authors: Vec<String>,
    /// Abstract text.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Publication date (January 1st when only a year is known).
    pub publication_date: Option<NaiveDate>,
    /// Journal or conference name.
    pub venue: Option<String>,
    /// Normalized DOI (no resolver prefix).
    pub doi: Option<String>,
    /// Citation count reported by the provider.
    pub citation_count: i64,
    /// Open-access PDF link.
    pub pdf_url: Option<String>,
    /// Which provider produced the hit.
    pub source: String,
}

/// Which provider(s) a search request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchSource {
    /// Fan out to every provider.
    All,
    /// Semantic Scholar only.
    SemanticScholar,
    /// OpenAlex only.
    Openalex,
    /// Crossref only.
    Crossref,
}

impl SearchSource {
    /// Whether this selection includes the given provider.
    pub fn includes(&self, other: SearchSource) -> bool {
        *self == SearchSource::All || *self == other
    }
}

impl Default for SearchSource {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::SemanticScholar => "semantic-scholar",
            Self::Openalex => "openalex",
            Self::Crossref => "crossref",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SearchSource {
    type Err = paperflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "semantic-scholar" => Ok(Self::SemanticScholar),
            "openalex" => Ok(Self::Openalex),
            "crossref" => Ok(Self::Crossref),
            _ => Err(paperflow_core::AppError::validation(format!(
                "Invalid search source: '{s}'. Expected one of: all, semantic-scholar, openalex, crossref"
            ))),
        }
    }
}

/// Strip a DOI resolver prefix so DOIs compare equal across providers.
pub fn normalize_doi(doi: &str) -> String {
    doi.trim()
        .trim_start_matches("https://doi.org/")
        .trim_start_matches("http://doi.org/")
        .trim_start_matches("doi:")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            "semantic-scholar".parse::<SearchSource>().unwrap(),
            SearchSource::SemanticScholar
        );
        assert!("scholar".parse::<SearchSource>().is_err());
    }

    #[test]
    fn test_source_includes() {
        assert!(SearchSource::All.includes(SearchSource::Crossref));
        assert!(SearchSource::Openalex.includes(SearchSource::Openalex));
        assert!(!SearchSource::Openalex.includes(SearchSource::Crossref));
    }

    #[test]
    fn test_normalize_doi() {
        assert_eq!(
            normalize_doi("https://doi.org/10.1000/xyz123"),
            "10.1000/xyz123"
        );
        assert_eq!(normalize_doi("10.1000/xyz123"), "10.1000/xyz123");
    }
}
