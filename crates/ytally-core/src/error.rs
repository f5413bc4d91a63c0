use thiserror::Error;

#[derive(Error, Debug)]
pub enum YtallyError {
    #[error("Invalid YouTube playlist URL: {url}")]
    InvalidPlaylistUrl { url: String },

    #[error("YouTube API error: {message}")]
    Api { message: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },
}

pub type Result<T> = std::result::Result<T, YtallyError>;
