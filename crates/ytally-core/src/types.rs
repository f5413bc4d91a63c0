/// One page of playlist items, in playlist order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistPage {
    pub videos: Vec<PlaylistVideo>,
    pub next_page_token: Option<String>,
}

/// A single playlist entry. Only the video id survives a page iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistVideo {
    pub id: String,
}

/// Per-video content metadata returned by a batched lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDetails {
    pub id: String,
    pub duration: String,
}
