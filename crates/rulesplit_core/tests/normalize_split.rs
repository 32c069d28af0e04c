use std::sync::Once;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rulesplit_core::{
    normalize_lines, part_name, partition, render_part, split_lines, Attribution, PART_COUNT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(rulesplit_logging::initialize_for_tests);
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn normalizes_mixed_raw_cache() {
    init_logging();
    let raw = owned(&[
        "b\n",
        "a\n",
        "a\n",
        "\n",
        "!comment\n",
        "[Adblock Plus]\n",
        "x\n",
    ]);
    assert_eq!(normalize_lines(raw), owned(&["a\n", "b\n", "x\n"]));
}

#[test]
fn concatenated_sources_normalize_together() {
    init_logging();
    let raw = "[Adblock Plus 2.0]\n! Title: One\n||b.example^\n||a.example^\n\n\
               [Adblock Plus 2.0]\n! Title: Two\n||a.example^\n##.ad\n\n";
    let normalized = normalize_lines(split_lines(raw));
    assert_eq!(normalized, owned(&["##.ad\n", "||a.example^\n", "||b.example^\n"]));
}

#[test]
fn every_surviving_line_lands_in_exactly_one_part() {
    init_logging();
    let raw: Vec<String> = (0..25)
        .flat_map(|i| [format!("||host{:02}.example^\n", i % 17), "! noise\n".to_string()])
        .collect();
    let normalized = normalize_lines(raw);
    assert_eq!(normalized.len(), 17);

    let parts = partition(&normalized);
    let mut seen: Vec<String> = Vec::new();
    for part in parts {
        for line in part {
            assert!(!seen.contains(line), "{line:?} appears twice");
            seen.push(line.clone());
        }
    }
    assert_eq!(seen, normalized);
    let mut sorted = seen.clone();
    sorted.sort();
    assert_eq!(seen, sorted);
}

#[test]
fn rendered_parts_carry_attribution_and_title() {
    init_logging();
    let mut attribution = Attribution::default();
    attribution.record("https://lists.example/one.txt");
    let lines = owned(&["r1\n", "r2\n", "r3\n", "r4\n"]);
    let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();

    let rendered: Vec<(String, String)> = partition(&lines)
        .iter()
        .enumerate()
        .map(|(i, part)| (part_name("rules", i), render_part(date, i, &attribution, part)))
        .collect();

    assert_eq!(rendered.len(), PART_COUNT);
    assert_eq!(rendered[0].0, "rules_1.txt");
    assert!(rendered[0].1.ends_with("!\nr1\nr2\n"));
    assert!(rendered[1].1.contains("! Title: AdBlockPlus Part 2/3\n"));
    assert!(rendered[1].1.ends_with("!\nr3\nr4\n"));
    assert!(rendered[2].1.ends_with("! https://lists.example/one.txt\n!\n"));
    for (_, text) in &rendered {
        assert!(text.starts_with("[Adblock Plus 2.0]\n! Version: 02.01.2025\n"));
    }
}
