use crate::duration::{format_duration, parse_duration};
use crate::error::{Result, YtallyError};
use crate::service::{MAX_PAGE_SIZE, PlaylistService};
use crate::url::extract_playlist_id;

/// Compute the total playback duration of the playlist referenced by `url`,
/// rendered as `H:MM:SS`.
///
/// Pagination is strictly sequential: each page's batched metadata lookup
/// completes before the next page is requested. A URL that does not name a
/// playlist fails before any remote call; a remote failure aborts the whole
/// computation.
pub async fn playlist_duration(url: &str, service: &impl PlaylistService) -> Result<String> {
    let playlist_id =
        extract_playlist_id(url).ok_or_else(|| YtallyError::InvalidPlaylistUrl {
            url: url.to_owned(),
        })?;

    let mut total_seconds = 0u64;
    let mut page_token: Option<String> = None;

    loop {
        let page = service
            .playlist_page(&playlist_id, MAX_PAGE_SIZE, page_token.as_deref())
            .await?;
        let video_ids: Vec<String> = page.videos.into_iter().map(|video| video.id).collect();

        for video in service.video_details(&video_ids).await? {
            total_seconds += parse_duration(&video.duration);
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(format_duration(total_seconds))
}
