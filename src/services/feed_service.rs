use sqlx::SqlitePool;

use crate::database::feed_repo;
use crate::error::AppError;
use crate::models::UserRow;

/// One candidate in the feed, flattened for the template.
pub struct CandidateCard {
    pub id: i64,
    pub display_name: String,
    pub location: String,
    pub hobbies: String,
    pub interests: String,
    pub photo_url: String,
}

impl CandidateCard {
    fn from_row(row: UserRow) -> Self {
        CandidateCard {
            id: row.id,
            display_name: format!("{} {}", row.first_name, row.last_name),
            location: row.location,
            hobbies: row.hobbies,
            interests: row.interests,
            photo_url: row.photo_url.unwrap_or_default(),
        }
    }
}

/// All users the viewer has not judged yet, viewer excluded, ascending id,
/// capped at `limit` so the page never grows unbounded.
pub async fn candidates_for(
    pool: &SqlitePool,
    viewer_id: i64,
    limit: i64,
) -> Result<Vec<UserRow>, AppError> {
    let rows = feed_repo::load_feed_candidates(pool, viewer_id, limit).await?;
    Ok(rows)
}

pub async fn build_feed_page(
    pool: &SqlitePool,
    viewer_id: i64,
    limit: i64,
) -> Result<Vec<CandidateCard>, AppError> {
    let rows = candidates_for(pool, viewer_id, limit).await?;
    Ok(rows.into_iter().map(CandidateCard::from_row).collect())
}
