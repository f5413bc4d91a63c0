use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DURATION_RE: Regex =
        Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap();
}

/// Decode a compact `PT#H#M#S` duration into total seconds.
///
/// Total over all inputs: a string without the `PT` prefix decodes to 0, and
/// so does every missing component. Live streams report `P0D`; anything
/// unreadable counts as 0.
pub fn parse_duration(duration: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(duration) else {
        return 0;
    };
    let part = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    part(1) * 3600 + part(2) * 60 + part(3)
}

/// Format seconds as an `H:MM:SS` elapsed time, hours unbounded
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
