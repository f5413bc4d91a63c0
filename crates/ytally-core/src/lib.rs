//! ytally Core Library
//!
//! Core functionality for computing the total playback duration of a YouTube
//! playlist: paged playlist listing, batched video metadata lookups, and the
//! compact duration codec.

pub mod aggregate;
pub mod duration;
pub mod error;
pub mod service;
pub mod types;
pub mod url;
pub mod youtube;

// Re-export commonly used items at crate root
pub use aggregate::playlist_duration;
pub use duration::{format_duration, parse_duration};
pub use error::{Result, YtallyError};
pub use service::{MAX_PAGE_SIZE, PlaylistService};
pub use types::{PlaylistPage, PlaylistVideo, VideoDetails};
pub use url::extract_playlist_id;
pub use youtube::{API_KEY_ENV_VAR, YOUTUBE_API_BASE, YouTubeClient};
