//! Tracker code table definitions.

use std::fmt;

use crate::error::{Error, Result};

/// Built-in mapping of tracker hostname fragments to filename prefixes.
///
/// Order matters: the first entry that matches wins.
const DEFAULT_CODES: &[(&str, &str)] = &[
    ("Aither.cc", "[ATH] "),
    ("Upload.cx", "[ULCX] "),
    ("Blutopia.cc", "[BLU] "),
    ("FearNoPeer.com", "[FNP] "),
    ("LST.gg", "[LST] "),
    ("TheLDU.to", "[LDU] "),
    ("OldToons.world", "[OTW] "),
    ("TLeechReload.org", "[TL] "),
    ("TorrentLeech.org", "[TL] "),
];

/// A single table entry: a hostname fragment and the prefix it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerCode {
    pub key: String,
    pub code: String,
    key_lower: String,
}

impl TrackerCode {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        let key = key.into();
        let key_lower = key.to_lowercase();
        Self {
            key,
            code: code.into(),
            key_lower,
        }
    }

    /// Case-insensitive substring match against an already lowercased URL.
    pub(crate) fn matches_lowercase(&self, url_lower: &str) -> bool {
        url_lower.contains(&self.key_lower)
    }
}

/// Ordered list of tracker codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerCodeTable {
    entries: Vec<TrackerCode>,
}

impl TrackerCodeTable {
    /// An empty table. Every torrent classifies to the empty code.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn new(entries: Vec<TrackerCode>) -> Self {
        Self { entries }
    }

    /// Build a table with `overrides` placed ahead of `self`.
    pub fn with_overrides(self, overrides: Vec<TrackerCode>) -> Self {
        let mut entries = overrides;
        entries.extend(self.entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[TrackerCode] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackerCode> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TrackerCodeTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_CODES
                .iter()
                .map(|(key, code)| TrackerCode::new(*key, *code))
                .collect(),
        )
    }
}

impl fmt::Display for TrackerCodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{:>2}. {:<20} {:?}", i + 1, entry.key, entry.code)?;
        }
        Ok(())
    }
}

/// Parse a `KEY=CODE` mapping supplied on the command line.
///
/// The code is trimmed and gets a single trailing space so it reads as a
/// prefix, e.g. `"Example.org=[EX]"` yields the code `"[EX] "`.
pub fn parse_tracker_mapping(input: &str) -> Result<TrackerCode> {
    let (key, code) = input.split_once('=').ok_or_else(|| Error::ConfigValidation {
        field: "tracker".to_string(),
        message: format!("Expected KEY=CODE, got '{}'", input),
    })?;

    let key = key.trim();
    let code = code.trim();

    if key.is_empty() {
        return Err(Error::ConfigValidation {
            field: "tracker".to_string(),
            message: format!("Tracker key cannot be empty in '{}'", input),
        });
    }

    if code.is_empty() {
        return Err(Error::ConfigValidation {
            field: "tracker".to_string(),
            message: format!("Tracker code cannot be empty in '{}'", input),
        });
    }

    Ok(TrackerCode::new(key, format!("{} ", code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let table = TrackerCodeTable::default();
        let keys: Vec<&str> = table.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys.first(), Some(&"Aither.cc"));
        assert_eq!(keys.last(), Some(&"TorrentLeech.org"));
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn test_parse_tracker_mapping() {
        let entry = parse_tracker_mapping("Example.org=[EX]").unwrap();
        assert_eq!(entry.key, "Example.org");
        assert_eq!(entry.code, "[EX] ");

        let entry = parse_tracker_mapping(" tracker.net = [TN]  ").unwrap();
        assert_eq!(entry.key, "tracker.net");
        assert_eq!(entry.code, "[TN] ");
    }

    #[test]
    fn test_parse_tracker_mapping_invalid() {
        assert!(parse_tracker_mapping("no-separator").is_err());
        assert!(parse_tracker_mapping("=[EX]").is_err());
        assert!(parse_tracker_mapping("Example.org=").is_err());
    }

    #[test]
    fn test_overrides_come_first() {
        let table = TrackerCodeTable::default()
            .with_overrides(vec![TrackerCode::new("Aither.cc", "[AITHER] ")]);
        assert_eq!(table.entries()[0].code, "[AITHER] ");
        assert_eq!(table.len(), 10);
    }
}
