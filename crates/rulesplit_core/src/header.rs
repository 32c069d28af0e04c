use chrono::NaiveDate;

use crate::{Attribution, PART_COUNT};

/// First line of every output part.
pub const FORMAT_LINE: &str = "[Adblock Plus 2.0]";

/// Renders a complete output part: header block followed by `rules` verbatim.
///
/// `index` is zero-based; the title shows it one-based out of `PART_COUNT`.
/// `date` is printed as-is, so callers pass the date in the reader's time zone.
pub fn render_part(
    date: NaiveDate,
    index: usize,
    attribution: &Attribution,
    rules: &[String],
) -> String {
    let body_len: usize = rules.iter().map(String::len).sum();
    let mut out = String::with_capacity(128 + attribution.as_str().len() + body_len);
    out.push_str(FORMAT_LINE);
    out.push('\n');
    out.push_str(&format!("! Version: {}\n", date.format("%d.%m.%Y")));
    out.push_str(&format!("! Title: AdBlockPlus Part {}/{PART_COUNT}\n", index + 1));
    out.push_str("!\n");
    out.push_str(attribution.as_str());
    out.push_str("!\n");
    for rule in rules {
        out.push_str(rule);
    }
    out
}
