//! # paperflow-cite
//!
//! Citation string formatting for academic papers: the six supported
//! bibliography styles plus BibTeX and RIS export.

pub mod bibtex;
pub mod formatter;
pub mod ris;
pub mod style;

pub use bibtex::generate_bibtex;
pub use formatter::{SourcePaper, format_citation};
pub use ris::generate_ris;
pub use style::CitationStyle;
