//! Output file naming.

use chrono::{DateTime, Local, SecondsFormat};

/// How many file names are tried before giving up.
pub const MAX_NAME_ATTEMPTS: u32 = 100;

/// Format the wall-clock part of a file name, e.g. `2024-05-01T10:20:30+02:00`.
pub fn file_name_timestamp(now: DateTime<Local>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Concatenate prefix, timestamp and extension.
pub fn build_file_name(prefix: &str, timestamp: &str, extension: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + timestamp.len() + extension.len());
    name.push_str(prefix);
    name.push_str(timestamp);
    name.push_str(extension);
    name
}

/// The name to try on the given attempt; attempt 0 has no suffix.
pub(crate) fn candidate_name(
    prefix: &str,
    timestamp: &str,
    extension: &str,
    attempt: u32,
) -> String {
    if attempt == 0 {
        build_file_name(prefix, timestamp, extension)
    } else {
        build_file_name(prefix, &format!("{timestamp}-{attempt}"), extension)
    }
}
