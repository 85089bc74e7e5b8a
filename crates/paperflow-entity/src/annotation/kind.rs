//! Annotation kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The visual/semantic category of a PDF annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "annotation_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// Colored text highlight.
    Highlight,
    /// Standalone note on a page.
    Note,
    /// Freehand drawing overlay.
    Drawing,
    /// Comment anchored to a selection.
    Comment,
    /// Underlined text selection.
    Underline,
    /// Struck-through text selection.
    Strikethrough,
}

impl Default for AnnotationKind {
    fn default() -> Self {
        Self::Highlight
    }
}

impl AnnotationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Highlight => "highlight",
            Self::Note => "note",
            Self::Drawing => "drawing",
            Self::Comment => "comment",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
