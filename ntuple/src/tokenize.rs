/// A normalized token. May be empty when a line contains consecutive spaces.
pub type Word = String;

/// Trim, lower-case and drop every character outside `[a-z0-9 ]`.
pub fn normalize(line: &str) -> String {
    line.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Split a normalized line on single spaces. Never fails, and always yields at
/// least one word (an empty line is a single empty word).
pub fn tokenize(line: &str) -> Vec<Word> {
    normalize(line).split(' ').map(str::to_owned).collect()
}
