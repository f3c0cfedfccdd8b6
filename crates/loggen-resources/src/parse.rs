//! Parsers for the two resource file formats.

/// Split comma-separated words.
///
/// All lines are joined with nothing in between before splitting on `,`, so
/// a trailing newline never yields an empty word. The flip side is that a
/// list wrapped over several lines must end each line with a comma, or the
/// last word of one line and the first word of the next run together:
///
/// ```
/// use loggen_resources::parse_csv_words;
///
/// assert_eq!(parse_csv_words("Foo,Bar\n"), vec!["Foo", "Bar"]);
/// assert_eq!(parse_csv_words("Foo,\nBar"), vec!["Foo", "Bar"]);
/// assert_eq!(parse_csv_words("Foo\nBar"), vec!["FooBar"]);
/// ```
///
/// Content with no characters at all yields no words.
pub fn parse_csv_words(content: &str) -> Vec<String> {
    let joined: String = content.lines().collect();
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(',').map(str::to_string).collect()
}

/// Split newline-terminated records.
///
/// Accepts `\n` and `\r\n`. Records are not trimmed; a final newline does not
/// add an empty record.
pub fn parse_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
