//! First-match classification of tracker lists.

use crate::api::TrackerEntry;
use crate::error::{Error, Result};
use crate::tracker::codes::TrackerCodeTable;

/// Find the prefix code for a torrent's trackers.
///
/// Trackers are scanned in the order the daemon returned them; for each one
/// the table is scanned in definition order. Returns `""` when nothing
/// matches. Fails if an entry without a `url` is reached before a match;
/// callers report that and fall back to `""`.
pub fn classify<'t>(
    trackers: &[TrackerEntry],
    table: &'t TrackerCodeTable,
) -> Result<&'t str> {
    for (index, tracker) in trackers.iter().enumerate() {
        let url = tracker.url.as_deref().ok_or_else(|| {
            Error::MalformedTrackers(format!("entry {} has no 'url' field", index))
        })?;

        let url_lower = url.to_lowercase();
        if let Some(entry) = table.iter().find(|e| e.matches_lowercase(&url_lower)) {
            return Ok(entry.code.as_str());
        }
    }

    Ok("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::codes::TrackerCode;

    fn trackers(urls: &[&str]) -> Vec<TrackerEntry> {
        urls.iter().map(|u| TrackerEntry::new(*u)).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let table = TrackerCodeTable::default();
        let list = trackers(&["https://AITHER.CC/announce/abcdef"]);
        assert_eq!(classify(&list, &table).unwrap(), "[ATH] ");
    }

    #[test]
    fn test_no_match_is_empty() {
        let table = TrackerCodeTable::default();
        let list = trackers(&["udp://tracker.opentrackr.org:1337/announce", "** [DHT] **"]);
        assert_eq!(classify(&list, &table).unwrap(), "");
        assert_eq!(classify(&[], &table).unwrap(), "");
    }

    #[test]
    fn test_trackers_scanned_in_daemon_order() {
        let table = TrackerCodeTable::default();
        // Blutopia comes after Aither in the table, but is listed first here.
        let list = trackers(&["https://blutopia.cc/announce/x", "https://aither.cc/announce/y"]);
        assert_eq!(classify(&list, &table).unwrap(), "[BLU] ");
    }

    #[test]
    fn test_table_order_breaks_ties_for_one_tracker() {
        let table = TrackerCodeTable::new(vec![
            TrackerCode::new("example", "[EX] "),
            TrackerCode::new("tracker.example.org", "[TEO] "),
        ]);
        let list = trackers(&["https://tracker.example.org/announce"]);
        assert_eq!(classify(&list, &table).unwrap(), "[EX] ");
    }

    #[test]
    fn test_torrentleech_aliases_share_code() {
        let table = TrackerCodeTable::default();
        for url in ["https://tracker.tleechreload.org/a/1", "https://tracker.torrentleech.org/a/1"] {
            assert_eq!(classify(&trackers(&[url]), &table).unwrap(), "[TL] ");
        }
    }

    #[test]
    fn test_entry_without_url_is_error() {
        let table = TrackerCodeTable::default();
        let list = vec![
            TrackerEntry { url: None },
            TrackerEntry::new("https://aither.cc/announce"),
        ];
        let err = classify(&list, &table).unwrap_err();
        assert!(matches!(err, Error::MalformedTrackers(_)));
    }

    #[test]
    fn test_match_before_malformed_entry_still_wins() {
        let table = TrackerCodeTable::default();
        let list = vec![
            TrackerEntry::new("https://aither.cc/announce"),
            TrackerEntry { url: None },
        ];
        assert_eq!(classify(&list, &table).unwrap(), "[ATH] ");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let table = TrackerCodeTable::default();
        let list = trackers(&["https://fearnopeer.com/announce", "https://lst.gg/announce"]);
        let first = classify(&list, &table).unwrap();
        for _ in 0..10 {
            assert_eq!(classify(&list, &table).unwrap(), first);
        }
        assert_eq!(first, "[FNP] ");
    }
}
