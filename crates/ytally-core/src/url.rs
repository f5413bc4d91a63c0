use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAYLIST_ID_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"list=([^&\n]+)").unwrap(),
        Regex::new(r"youtube\.com/playlist\?list=([^&\n]+)").unwrap(),
        Regex::new(r"youtu\.be/([^&\n]+)").unwrap(),
    ];
}

/// Extract a playlist id from a URL.
///
/// Patterns are tried in order and the first match wins: a plain `list=`
/// query parameter, the canonical playlist page form, then a `youtu.be`
/// short link.
pub fn extract_playlist_id(url: &str) -> Option<String> {
    PLAYLIST_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str().to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            extract_playlist_id("https://youtube.com/watch?v=abc&list=PL123&index=2"),
            Some("PL123".to_owned())
        );
    }

    #[test]
    fn extracts_from_playlist_page_url() {
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/playlist?list=PLrAXtmRdnEQy"),
            Some("PLrAXtmRdnEQy".to_owned())
        );
    }

    #[test]
    fn extracts_from_short_link() {
        assert_eq!(
            extract_playlist_id("https://youtu.be/PL456"),
            Some("PL456".to_owned())
        );
    }

    #[test]
    fn list_parameter_takes_priority_over_short_link() {
        assert_eq!(
            extract_playlist_id("https://youtu.be/dQw4w9WgXcQ?list=PL789"),
            Some("PL789".to_owned())
        );
    }

    #[test]
    fn stops_at_ampersand() {
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/watch?list=PLabc&v=xyz"),
            Some("PLabc".to_owned())
        );
    }

    #[test]
    fn rejects_unrelated_url() {
        assert_eq!(extract_playlist_id("https://example.com/nothing"), None);
    }
}
