//! Supported citation styles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bibliography style a citation string can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// American Psychological Association.
    Apa,
    /// Modern Language Association.
    Mla,
    /// Chicago Manual of Style.
    Chicago,
    /// Harvard referencing (author-date, rendered like APA).
    Harvard,
    /// Institute of Electrical and Electronics Engineers.
    Ieee,
    /// Vancouver (ICMJE) numeric style.
    Vancouver,
}

impl Default for CitationStyle {
    fn default() -> Self {
        Self::Apa
    }
}

impl CitationStyle {
    /// Return the style as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apa => "apa",
            Self::Mla => "mla",
            Self::Chicago => "chicago",
            Self::Harvard => "harvard",
            Self::Ieee => "ieee",
            Self::Vancouver => "vancouver",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CitationStyle {
    type Err = paperflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apa" => Ok(Self::Apa),
            "mla" => Ok(Self::Mla),
            "chicago" => Ok(Self::Chicago),
            "harvard" => Ok(Self::Harvard),
            "ieee" => Ok(Self::Ieee),
            "vancouver" => Ok(Self::Vancouver),
            _ => Err(paperflow_core::AppError::validation(format!(
                "Invalid citation style: '{s}'. Expected one of: apa, mla, chicago, harvard, ieee, vancouver"
            ))),
        }
    }
}
