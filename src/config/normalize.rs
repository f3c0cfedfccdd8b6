//! File name part normalization.

/// Ensure the extension starts with a dot: `txt` becomes `.txt`.
pub fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

/// Ensure the prefix ends with a separator so the timestamp stands apart.
///
/// A prefix already ending in `-` or `_` is kept as is; anything else gets a
/// `-` appended.
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.ends_with('-') || prefix.ends_with('_') {
        prefix.to_string()
    } else {
        format!("{prefix}-")
    }
}
