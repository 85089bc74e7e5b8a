//! Recent-activity feed across papers, insights, and collections.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use paperflow_core::error::AppError;
use paperflow_database::repositories::collection::CollectionRepository;
use paperflow_database::repositories::insight::InsightRepository;
use paperflow_database::repositories::paper::PaperRepository;

use crate::context::RequestContext;

/// What kind of object an activity entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A paper was saved.
    Upload,
    /// An insight card was created.
    Insight,
    /// A collection was created.
    Collection,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    /// ID of the referenced object.
    pub id: Uuid,
    /// Who acted.
    pub user: String,
    /// What happened, e.g. "added".
    pub action: &'static str,
    /// Display name of the object.
    pub target: String,
    /// Humanized relative time, e.g. "2 hours ago".
    pub time: String,
    /// Entry category.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// When it happened.
    pub occurred_at: DateTime<Utc>,
}

/// Builds the recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityService {
    paper_repo: Arc<PaperRepository>,
    insight_repo: Arc<InsightRepository>,
    collection_repo: Arc<CollectionRepository>,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(
        paper_repo: Arc<PaperRepository>,
        insight_repo: Arc<InsightRepository>,
        collection_repo: Arc<CollectionRepository>,
    ) -> Self {
        Self {
            paper_repo,
            insight_repo,
            collection_repo,
        }
    }

    /// Merges recent papers, insights, and collections into one feed,
    /// newest first, capped at `limit` entries.
    pub async fn feed(
        &self,
        ctx: &RequestContext,
        limit: usize,
    ) -> Result<Vec<ActivityEntry>, AppError> {
        let per_source = (limit.div_ceil(3)).max(1) as i64;
        let user = display_user(&ctx.email);
        let now = Utc::now();

        let (papers, insights, collections) = tokio::join!(
            self.paper_repo.recent_for_user(ctx.user_id, per_source),
            self.insight_repo.recent_for_user(ctx.user_id, per_source),
            self.collection_repo.recent_for_user(ctx.user_id, per_source),
        );

        let mut entries: Vec<ActivityEntry> = Vec::new();

        for paper in papers? {
            entries.push(ActivityEntry {
                id: paper.id,
                user: user.clone(),
                action: "added",
                target: paper.title,
                time: format_time_ago(paper.created_at, now),
                kind: ActivityKind::Upload,
                occurred_at: paper.created_at,
            });
        }
        for insight in insights? {
            entries.push(ActivityEntry {
                id: insight.id,
                user: user.clone(),
                action: "created insight",
                target: insight.title,
                time: format_time_ago(insight.created_at, now),
                kind: ActivityKind::Insight,
                occurred_at: insight.created_at,
            });
        }
        for collection in collections? {
            entries.push(ActivityEntry {
                id: collection.id,
                user: user.clone(),
                action: "created collection",
                target: collection.name,
                time: format_time_ago(collection.created_at, now),
                kind: ActivityKind::Collection,
                occurred_at: collection.created_at,
            });
        }

        entries.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        entries.truncate(limit);

        Ok(entries)
    }
}

/// The part of the email before the @, used as a display name.
fn display_user(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Humanize the gap between `then` and `now`.
fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min{} ago", if minutes > 1 { "s" } else { "" });
    }
    if hours < 24 {
        return format!("{hours} hour{} ago", if hours > 1 { "s" } else { "" });
    }
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{days} days ago");
    }
    if days < 30 {
        let weeks = days / 7;
        return format!("{weeks} week{} ago", if weeks > 1 { "s" } else { "" });
    }
    then.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now, now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5 mins ago");
        assert_eq!(format_time_ago(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(format_time_ago(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_time_ago(now - Duration::days(1), now), "Yesterday");
        assert_eq!(format_time_ago(now - Duration::days(3), now), "3 days ago");
        assert_eq!(format_time_ago(now - Duration::days(14), now), "2 weeks ago");
    }

    #[test]
    fn test_format_time_ago_old_dates_are_absolute() {
        let now = Utc::now();
        let old = now - Duration::days(90);
        assert_eq!(format_time_ago(old, now), old.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_display_user() {
        assert_eq!(display_user("ada@example.com"), "ada");
        assert_eq!(display_user("no-at-sign"), "no-at-sign");
    }
}
