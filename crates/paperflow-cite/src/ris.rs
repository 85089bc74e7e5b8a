//! RIS export.

use crate::formatter::SourcePaper;

/// Render a paper as an RIS journal-article record.
pub fn generate_ris(paper: &SourcePaper<'_>) -> String {
    let title = if paper.title.is_empty() {
        "Untitled"
    } else {
        paper.title
    };
    let year = paper.year.map(|y| y.to_string()).unwrap_or_default();
    let venue = paper.venue.unwrap_or("");
    let doi = paper.doi.unwrap_or("");

    let mut lines = vec!["TY  - JOUR".to_string(), format!("TI  - {title}")];
    for author in paper.authors {
        lines.push(format!("AU  - {author}"));
    }
    lines.push(format!("PY  - {year}"));
    lines.push(format!("JO  - {venue}"));
    lines.push(format!("DO  - {doi}"));
    lines.push("ER  -".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ris_record() {
        let authors = vec!["He, Kaiming".to_string(), "Zhang, Xiangyu".to_string()];
        let paper = SourcePaper {
            id: "he2016",
            title: "Deep Residual Learning",
            authors: &authors,
            year: Some(2016),
            venue: Some("CVPR"),
            doi: Some("10.1109/CVPR.2016.90"),
        };

        let ris = generate_ris(&paper);
        let lines: Vec<&str> = ris.lines().collect();
        assert_eq!(lines[0], "TY  - JOUR");
        assert_eq!(lines[1], "TI  - Deep Residual Learning");
        assert_eq!(lines[2], "AU  - He, Kaiming");
        assert_eq!(lines[3], "AU  - Zhang, Xiangyu");
        assert_eq!(*lines.last().unwrap(), "ER  -");
    }
}
