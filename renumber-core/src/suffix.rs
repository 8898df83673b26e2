use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

static TRAILING_DIGITS: OnceLock<Regex> = OnceLock::new();

fn trailing_digits() -> &'static Regex {
    TRAILING_DIGITS.get_or_init(|| Regex::new(r"([0-9]+)$").expect("valid trailing digit pattern"))
}

/// The value of the digit run at the end of a folder name.
///
/// Kept as normalized decimal text so that arbitrarily long runs (for example
/// timestamps glued to a name) never overflow. Ordering is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailingNumber {
    digits: String,
}

impl TrailingNumber {
    /// Build from a run of ASCII digits, dropping leading zeros.
    pub fn from_digits(raw: &str) -> Self {
        let trimmed = raw.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            digits: digits.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The value as `u64`, or `None` when it does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl Ord for TrailingNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros, so a longer run is always the larger number
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for TrailingNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TrailingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Extract the digits at the very end of `name`.
///
/// `"room12"` gives 12, `"room007"` gives 7, `"room12b"` gives `None`.
pub fn extract_trailing_number(name: &str) -> Option<TrailingNumber> {
    trailing_digits()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| TrailingNumber::from_digits(m.as_str()))
}

/// Name a matched folder gets: the prefix, one space, the normalized number.
///
/// The prefix is not checked. A `/` or `..` in it goes straight into the
/// joined target path, so `"sub/Page"` moves the folder into `sub`.
pub fn build_new_name(prefix: &str, number: &TrailingNumber) -> String {
    format!("{prefix} {number}")
}
