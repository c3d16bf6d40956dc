//! Text helpers shared by every template. The original UI duplicated
//! these per template file; here they live in exactly one place.

/// Normalizes a stored URL for use as a link target: a schemeless URL
/// gets `https://` prepended. Empty input stays empty.
pub fn format_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    format!("https://{url}")
}

/// Cosmetic display form of a URL: strips one leading scheme and one
/// leading `www.`. The underlying link target keeps the scheme.
pub fn display_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.to_string()
}

/// Splits a `\n`-delimited description into bullet lines: empty lines
/// dropped, one leading `"- "` marker stripped per line (its absence is
/// tolerated — the line becomes one opaque bullet).
pub fn description_lines(description: &str) -> Vec<String> {
    description
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("- ").unwrap_or(line).to_string())
        .collect()
}

/// Formats a date range for display. An open end date reads `Present`;
/// a range with no dates at all is skipped silently (renderers stay
/// total over arbitrary stored data).
pub fn date_range(start: &str, end: &str) -> Option<String> {
    match (start.trim(), end.trim()) {
        ("", "") => None,
        ("", end) => Some(end.to_string()),
        (start, "") => Some(format!("{start} - Present")),
        (start, end) => Some(format!("{start} - {end}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_url_prepends_scheme_once() {
        assert_eq!(format_url("janedoe.dev"), "https://janedoe.dev");
        assert_eq!(format_url("https://janedoe.dev"), "https://janedoe.dev");
        assert_eq!(format_url("http://janedoe.dev"), "http://janedoe.dev");
        assert_eq!(format_url(""), "");
    }

    #[test]
    fn test_display_url_strips_scheme_and_www() {
        assert_eq!(display_url("https://www.janedoe.dev"), "janedoe.dev");
        assert_eq!(display_url("http://janedoe.dev"), "janedoe.dev");
        assert_eq!(display_url("www.janedoe.dev"), "janedoe.dev");
        assert_eq!(display_url("janedoe.dev"), "janedoe.dev");
    }

    #[test]
    fn test_display_url_strips_exactly_once() {
        // The display form of a formatted URL equals the display form of
        // the raw URL, whatever prefix the input carried.
        for raw in [
            "janedoe.dev",
            "www.janedoe.dev",
            "https://janedoe.dev",
            "https://www.janedoe.dev",
            "http://www.janedoe.dev",
        ] {
            assert_eq!(display_url(&format_url(raw)), display_url(raw), "{raw}");
        }
        // A pathological double prefix is stripped only once.
        assert_eq!(
            display_url("https://www.www.janedoe.dev"),
            "www.janedoe.dev"
        );
    }

    #[test]
    fn test_description_lines_strip_marker_and_skip_blanks() {
        let lines = description_lines("- Led team\nShipped feature\n");
        assert_eq!(lines, vec!["Led team", "Shipped feature"]);
    }

    #[test]
    fn test_description_lines_empty_input() {
        assert!(description_lines("").is_empty());
    }

    #[test]
    fn test_description_lines_marker_stripped_once() {
        let lines = description_lines("- - nested marker");
        assert_eq!(lines, vec!["- nested marker"]);
    }

    #[test]
    fn test_date_range() {
        assert_eq!(
            date_range("2020-01", "2022-03").as_deref(),
            Some("2020-01 - 2022-03")
        );
        assert_eq!(date_range("2020-01", "").as_deref(), Some("2020-01 - Present"));
        assert_eq!(date_range("", "2022").as_deref(), Some("2022"));
        assert_eq!(date_range("", ""), None);
        assert_eq!(date_range("  ", " "), None);
    }
}
