//! Styled citation string rendering.

use crate::style::CitationStyle;

/// The paper fields citation rendering needs, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct SourcePaper<'a> {
    /// Stable identifier, used as the BibTeX key.
    pub id: &'a str,
    /// Paper title.
    pub title: &'a str,
    /// Author names in publication order.
    pub authors: &'a [String],
    /// Publication year.
    pub year: Option<i32>,
    /// Journal or conference name.
    pub venue: Option<&'a str>,
    /// Digital Object Identifier.
    pub doi: Option<&'a str>,
}

impl<'a> SourcePaper<'a> {
    fn title_or_untitled(&self) -> &'a str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            self.title
        }
    }

    fn year_or_nd(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n.d.".to_string())
    }

    fn venue_or_empty(&self) -> &'a str {
        self.venue.unwrap_or("")
    }
}

/// Render a citation string for the given style.
pub fn format_citation(paper: &SourcePaper<'_>, style: CitationStyle) -> String {
    match style {
        CitationStyle::Apa | CitationStyle::Harvard => format_apa(paper),
        CitationStyle::Mla => format_mla(paper),
        CitationStyle::Chicago => format_chicago(paper),
        CitationStyle::Ieee => format_ieee(paper),
        CitationStyle::Vancouver => format_vancouver(paper),
    }
}

fn format_apa(paper: &SourcePaper<'_>) -> String {
    let authors = authors_apa(paper.authors);
    let venue = paper.venue_or_empty();
    let venue_part = if venue.is_empty() {
        String::new()
    } else {
        format!("{venue}. ")
    };
    let doi_part = paper
        .doi
        .map(|d| format!("https://doi.org/{d}"))
        .unwrap_or_default();

    format!(
        "{authors} ({}). {}. {venue_part}{doi_part}",
        paper.year_or_nd(),
        paper.title_or_untitled()
    )
}

fn format_mla(paper: &SourcePaper<'_>) -> String {
    let venue = paper.venue_or_empty();
    let venue_part = if venue.is_empty() {
        String::new()
    } else {
        format!("{venue}, ")
    };

    format!(
        "{}. \"{}.\" {venue_part}{}.",
        authors_mla(paper.authors),
        paper.title_or_untitled(),
        paper.year_or_nd()
    )
}

fn format_chicago(paper: &SourcePaper<'_>) -> String {
    let venue = paper.venue_or_empty();
    let venue_part = if venue.is_empty() {
        String::new()
    } else {
        format!("{venue} ")
    };

    format!(
        "{}. \"{}.\" {venue_part}({}).",
        authors_chicago(paper.authors),
        paper.title_or_untitled(),
        paper.year_or_nd()
    )
}

fn format_ieee(paper: &SourcePaper<'_>) -> String {
    let venue = paper.venue_or_empty();
    let venue_part = if venue.is_empty() {
        String::new()
    } else {
        format!("{venue}, ")
    };

    format!(
        "{}, \"{},\" {venue_part}{}.",
        authors_ieee(paper.authors),
        paper.title_or_untitled(),
        paper.year_or_nd()
    )
}

fn format_vancouver(paper: &SourcePaper<'_>) -> String {
    let venue = paper.venue_or_empty();
    let venue_part = if venue.is_empty() {
        String::new()
    } else {
        format!("{venue}. ")
    };

    format!(
        "{}. {}. {venue_part}{}.",
        authors_vancouver(paper.authors),
        paper.title_or_untitled(),
        paper.year_or_nd()
    )
}

// Author-list rules differ per style; each follows the conventional
// et-al. threshold for that style.

fn authors_apa(authors: &[String]) -> String {
    match authors {
        [] => "Unknown".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} & {second}"),
        [first, ..] => format!("{first} et al."),
    }
}

fn authors_mla(authors: &[String]) -> String {
    authors
        .first()
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string())
}

fn authors_chicago(authors: &[String]) -> String {
    match authors {
        [] => "Unknown".to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [first, ..] => format!("{first} et al."),
    }
}

fn authors_ieee(authors: &[String]) -> String {
    match authors {
        [] => "Unknown".to_string(),
        list if list.len() <= 3 => list.join(", "),
        [first, ..] => format!("{first} et al."),
    }
}

fn authors_vancouver(authors: &[String]) -> String {
    match authors {
        [] => "Unknown".to_string(),
        list if list.len() <= 6 => list.join(", "),
        list => format!("{}, et al.", list[..6].join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn paper<'a>(authors: &'a [String]) -> SourcePaper<'a> {
        SourcePaper {
            id: "p1",
            title: "Deep Residual Learning",
            authors,
            year: Some(2016),
            venue: Some("CVPR"),
            doi: Some("10.1109/CVPR.2016.90"),
        }
    }

    #[test]
    fn test_apa_two_authors() {
        let authors = names(&["K. He", "X. Zhang"]);
        assert_eq!(
            format_citation(&paper(&authors), CitationStyle::Apa),
            "K. He & X. Zhang (2016). Deep Residual Learning. CVPR. \
             https://doi.org/10.1109/CVPR.2016.90"
        );
    }

    #[test]
    fn test_apa_many_authors_et_al() {
        let authors = names(&["K. He", "X. Zhang", "S. Ren", "J. Sun"]);
        let citation = format_citation(&paper(&authors), CitationStyle::Apa);
        assert!(citation.starts_with("K. He et al. (2016)."));
    }

    #[test]
    fn test_harvard_matches_apa() {
        let authors = names(&["K. He"]);
        assert_eq!(
            format_citation(&paper(&authors), CitationStyle::Harvard),
            format_citation(&paper(&authors), CitationStyle::Apa)
        );
    }

    #[test]
    fn test_mla_first_author_only() {
        let authors = names(&["K. He", "X. Zhang"]);
        assert_eq!(
            format_citation(&paper(&authors), CitationStyle::Mla),
            "K. He. \"Deep Residual Learning.\" CVPR, 2016."
        );
    }

    #[test]
    fn test_chicago_parenthesized_year() {
        let authors = names(&["K. He"]);
        assert_eq!(
            format_citation(&paper(&authors), CitationStyle::Chicago),
            "K. He. \"Deep Residual Learning.\" CVPR (2016)."
        );
    }

    #[test]
    fn test_ieee_three_authors_listed() {
        let authors = names(&["A", "B", "C"]);
        assert_eq!(
            format_citation(&paper(&authors), CitationStyle::Ieee),
            "A, B, C, \"Deep Residual Learning,\" CVPR, 2016."
        );
    }

    #[test]
    fn test_vancouver_seven_authors_truncated() {
        let authors = names(&["A", "B", "C", "D", "E", "F", "G"]);
        let citation = format_citation(&paper(&authors), CitationStyle::Vancouver);
        assert!(citation.starts_with("A, B, C, D, E, F, et al."));
        assert!(!citation.contains('G'));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let authors: Vec<String> = vec![];
        let minimal = SourcePaper {
            id: "p2",
            title: "",
            authors: &authors,
            year: None,
            venue: None,
            doi: None,
        };
        assert_eq!(
            format_citation(&minimal, CitationStyle::Apa),
            "Unknown (n.d.). Untitled. "
        );
    }
}
