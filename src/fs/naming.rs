//! Filename generation for exported torrents.

/// Extension appended to every exported file.
pub const TORRENT_EXTENSION: &str = "torrent";

/// Strip a torrent name down to characters that are safe in a filename.
///
/// Keeps alphanumerics (including non-ASCII letters and digits), `.`, `_`,
/// `-` and space. Everything else is dropped, not replaced.
pub fn sanitize_torrent_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '))
        .collect()
}

/// Build `<code><sanitized name>.torrent`.
pub fn export_file_name(code: &str, torrent_name: &str) -> String {
    format!(
        "{}{}.{}",
        code,
        sanitize_torrent_name(torrent_name),
        TORRENT_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_unsafe_characters() {
        assert_eq!(sanitize_torrent_name("My:Show/2024!"), "MyShow2024");
        assert_eq!(
            sanitize_torrent_name("Movie (2020) [1080p] {x264}"),
            "Movie 2020 1080p x264"
        );
        assert_eq!(sanitize_torrent_name("a\\b*c?d\"e<f>g|h"), "abcdefgh");
    }

    #[test]
    fn test_sanitize_keeps_allowed_punctuation() {
        assert_eq!(
            sanitize_torrent_name("Some.Show_S01-E02 WEB-DL"),
            "Some.Show_S01-E02 WEB-DL"
        );
    }

    #[test]
    fn test_sanitize_keeps_unicode_alphanumerics() {
        assert_eq!(sanitize_torrent_name("Amélie 天気の子"), "Amélie 天気の子");
    }

    #[test]
    fn test_sanitized_charset() {
        let names = ["../../etc/passwd", "tab\there", "new\nline", "emoji 🎬 name", "%$#@&"];
        for name in names {
            let clean = sanitize_torrent_name(name);
            assert!(
                clean
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | ' ')),
                "unexpected character in {:?}",
                clean
            );
            assert!(!clean.contains('/'));
        }
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("[ATH] ", "Foo Bar"), "[ATH] Foo Bar.torrent");
        assert_eq!(export_file_name("", "Foo: Bar"), "Foo Bar.torrent");
    }
}
