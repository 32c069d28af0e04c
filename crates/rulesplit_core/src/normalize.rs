/// Lines containing this marker are format headers, not rules.
pub const HEADER_MARKER: &str = "[Adblock";

/// Lines shorter than this (in characters, newline included) are dropped.
pub const MIN_LINE_CHARS: usize = 2;

const COMMENT_PREFIX: char = '!';

/// Splits text into lines that keep their trailing `\n`.
///
/// A final line without a newline is returned as-is.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(ToOwned::to_owned).collect()
}

/// Whether `line` is dropped during normalization, given the line before it
/// in sorted order.
pub fn should_skip(line: &str, previous: &str) -> bool {
    line.is_empty()
        || line.chars().count() < MIN_LINE_CHARS
        || line == previous
        || line.contains(HEADER_MARKER)
        || line.starts_with(COMMENT_PREFIX)
}

/// Sorts lines byte-wise and drops duplicates, short lines, headers and comments.
///
/// `previous` tracks every visited line, kept or not, so a duplicate of a
/// skipped line is skipped too.
pub fn normalize_lines(mut lines: Vec<String>) -> Vec<String> {
    lines.sort_unstable();

    let mut kept = Vec::with_capacity(lines.len());
    let mut previous = String::new();
    for line in lines {
        if !should_skip(&line, &previous) {
            kept.push(line.clone());
        }
        previous = line;
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_newlines() {
        assert_eq!(split_lines("a\nb\n\nc"), vec!["a\n", "b\n", "\n", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn bang_only_matters_at_start() {
        assert!(should_skip("!comment\n", ""));
        assert!(!should_skip("a!b\n", ""));
    }

    #[test]
    fn header_marker_anywhere_skips() {
        assert!(should_skip("x [Adblock Plus 2.0]\n", ""));
    }

    #[test]
    fn single_char_and_bare_newline_are_too_short() {
        assert!(should_skip("\n", ""));
        assert!(should_skip("a", ""));
        assert!(!should_skip("a\n", ""));
    }

    #[test]
    fn multibyte_length_counts_characters() {
        assert!(should_skip("é", ""));
        assert!(!should_skip("éé", ""));
    }

    #[test]
    fn non_adjacent_duplicates_collapse_after_sort() {
        let lines = vec!["b\n", "a\n", "b\n", "c\n", "a\n"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(normalize_lines(lines), vec!["a\n", "b\n", "c\n"]);
    }
}
