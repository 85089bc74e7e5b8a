//! Cross-source result aggregation.

use std::collections::HashSet;

use crate::types::SearchHit;

/// De-duplicate merged results by DOI when present, otherwise exact title.
///
/// The first occurrence wins, so callers control precedence by merge order.
pub fn dedupe_hits(hits: Vec<SearchHit>) -> Vec<SearchHit> {
    let mut seen_dois: HashSet<String> = HashSet::new();
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(hits.len());

    for hit in hits {
        let doi_key = hit
            .doi
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.to_lowercase());

        let duplicate = match &doi_key {
            Some(doi) => seen_dois.contains(doi) || seen_titles.contains(&hit.title),
            None => seen_titles.contains(&hit.title),
        };
        if duplicate {
            continue;
        }

        if let Some(doi) = doi_key {
            seen_dois.insert(doi);
        }
        seen_titles.insert(hit.title.clone());
        unique.push(hit);
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(title: &str, doi: Option<&str>, source: &str) -> SearchHit {
        SearchHit {
            id: None,
            title: title.to_string(),
            authors: vec![],
            abstract_text: None,
            publication_date: None,
            venue: None,
            doi: doi.map(String::from),
            citation_count: 0,
            pdf_url: None,
            source: source.to_string(),
        }
    }

    #[test]
    fn test_duplicate_doi_removed() {
        let hits = vec![
            hit("Attention Is All You Need", Some("10.1/abc"), "Semantic Scholar"),
            hit("Attention is all you need.", Some("10.1/ABC"), "Crossref"),
        ];
        let unique = dedupe_hits(hits);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].source, "Semantic Scholar");
    }

    #[test]
    fn test_duplicate_title_without_doi_removed() {
        let hits = vec![
            hit("Same Title", None, "OpenAlex"),
            hit("Same Title", None, "Crossref"),
        ];
        assert_eq!(dedupe_hits(hits).len(), 1);
    }

    #[test]
    fn test_distinct_hits_kept() {
        let hits = vec![
            hit("Paper A", Some("10.1/a"), "OpenAlex"),
            hit("Paper B", Some("10.1/b"), "OpenAlex"),
            hit("Paper C", None, "Crossref"),
        ];
        assert_eq!(dedupe_hits(hits).len(), 3);
    }
}
