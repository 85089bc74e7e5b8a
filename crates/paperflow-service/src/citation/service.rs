//! Citation generation and history.

use std::sync::Arc;

use chrono::Datelike;
use tracing::info;
use uuid::Uuid;

use paperflow_cite::{CitationStyle, SourcePaper, format_citation, generate_bibtex, generate_ris};
use paperflow_core::error::AppError;
use paperflow_database::repositories::citation::CitationRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_entity::paper::model::Paper;

use crate::context::RequestContext;

/// How a citation request wants the paper rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationOutput {
    /// A styled citation string; persisted to citation history.
    Styled(CitationStyle),
    /// BibTeX export; not persisted.
    Bibtex,
    /// RIS export; not persisted.
    Ris,
}

/// Generates citation strings and records styled citations.
#[derive(Debug, Clone)]
pub struct CitationService {
    /// Citation history repository.
    citation_repo: Arc<CitationRepository>,
    /// Paper repository.
    paper_repo: Arc<PaperRepository>,
}

impl CitationService {
    /// Creates a new citation service.
    pub fn new(citation_repo: Arc<CitationRepository>, paper_repo: Arc<PaperRepository>) -> Self {
        Self {
            citation_repo,
            paper_repo,
        }
    }

    /// Renders a citation for a paper.
    ///
    /// Styled citations are persisted for history; BibTeX/RIS exports are
    /// returned without being stored.
    pub async fn generate(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        output: CitationOutput,
    ) -> Result<String, AppError> {
        let paper = self
            .paper_repo
            .find_by_id(ctx.user_id, paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))?;

        let id = paper.id.to_string();
        let source = source_paper(&id, &paper);

        let formatted = match output {
            CitationOutput::Styled(style) => {
                let formatted = format_citation(&source, style);
                self.citation_repo
                    .create(paper_id, style.as_str(), &formatted)
                    .await?;

                info!(
                    user_id = %ctx.user_id,
                    paper_id = %paper_id,
                    style = %style,
                    "Citation generated"
                );

                formatted
            }
            CitationOutput::Bibtex => generate_bibtex(&source),
            CitationOutput::Ris => generate_ris(&source),
        };

        Ok(formatted)
    }

    /// Lists the styled citations previously generated for a paper.
    pub async fn history(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<Vec<paperflow_entity::citation::Citation>, AppError> {
        self.paper_repo
            .find_by_id(ctx.user_id, paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))?;

        self.citation_repo.list_for_paper(paper_id).await
    }
}

/// Borrow the citation-relevant fields out of a paper row.
fn source_paper<'a>(id: &'a str, paper: &'a Paper) -> SourcePaper<'a> {
    SourcePaper {
        id,
        title: &paper.title,
        authors: &paper.authors,
        year: paper.publication_date.map(|d| d.year()),
        venue: paper.venue.as_deref(),
        doi: paper.doi.as_deref(),
    }
}
