// src/util/text.rs

/// Parse a comma-separated tag string into individual tags.
///
/// This function:
/// 1. Splits on commas
/// 2. Trims whitespace around each fragment
/// 3. Drops empty fragments
///
/// # Examples
///
/// ```
/// use notectl::util::text::split_tags;
///
/// let tags = split_tags("work,  todo , ,urgent");
/// assert_eq!(tags, vec!["work", "todo", "urgent"]);
/// ```
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Extract the first non-empty line of a note's content, for list previews.
pub fn first_line(content: &str) -> &str {
    content
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
}
