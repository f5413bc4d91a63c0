use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PlaylistPage, VideoDetails};

/// Maximum number of items the YouTube Data API returns per page, and the
/// upper bound on one batched video lookup.
pub const MAX_PAGE_SIZE: usize = 50;

/// Capability interface over the remote playlist service: list one page of
/// playlist items by cursor, and batch-fetch content metadata for a set of
/// video ids.
#[async_trait]
pub trait PlaylistService {
    /// Fetch one page of playlist items, at most `max_results` of them,
    /// starting at `page_token` (`None` for the first page).
    async fn playlist_page(
        &self,
        playlist_id: &str,
        max_results: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage>;

    /// Fetch content metadata for the given video ids in a single batch.
    async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoDetails>>;
}
