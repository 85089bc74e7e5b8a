//! BibTeX export.

use crate::formatter::SourcePaper;

/// Render a paper as a BibTeX `@article` entry.
pub fn generate_bibtex(paper: &SourcePaper<'_>) -> String {
    let title = if paper.title.is_empty() {
        "Untitled"
    } else {
        paper.title
    };
    let authors = paper.authors.join(" and ");
    let year = paper.year.map(|y| y.to_string()).unwrap_or_default();
    let venue = paper.venue.unwrap_or("");
    let doi = paper.doi.unwrap_or("");

    format!(
        "@article{{{id},\n  title={{{title}}},\n  author={{{authors}}},\n  \
         journal={{{venue}}},\n  year={{{year}}},\n  doi={{{doi}}}\n}}",
        id = paper.id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bibtex_entry() {
        let authors = vec!["Kaiming He".to_string(), "Xiangyu Zhang".to_string()];
        let paper = SourcePaper {
            id: "he2016",
            title: "Deep Residual Learning",
            authors: &authors,
            year: Some(2016),
            venue: Some("CVPR"),
            doi: Some("10.1109/CVPR.2016.90"),
        };

        let bibtex = generate_bibtex(&paper);
        assert!(bibtex.starts_with("@article{he2016,"));
        assert!(bibtex.contains("author={Kaiming He and Xiangyu Zhang}"));
        assert!(bibtex.contains("journal={CVPR}"));
        assert!(bibtex.contains("year={2016}"));
        assert!(bibtex.ends_with("}"));
    }

    #[test]
    fn test_bibtex_missing_year_is_empty() {
        let authors: Vec<String> = vec![];
        let paper = SourcePaper {
            id: "x",
            title: "T",
            authors: &authors,
            year: None,
            venue: None,
            doi: None,
        };
        assert!(generate_bibtex(&paper).contains("year={}"));
    }
}
