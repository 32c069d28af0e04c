/// Number of output parts the normalized rules are split into.
pub const PART_COUNT: usize = 3;

/// Lines per part: `ceil(line_count / PART_COUNT)`.
pub fn chunk_size(line_count: usize) -> usize {
    line_count.div_ceil(PART_COUNT)
}

/// Partitions `lines` into exactly `PART_COUNT` contiguous slices.
///
/// Every slice but the last non-empty one holds `chunk_size` lines; trailing
/// slices are empty when there are too few lines to reach them.
pub fn partition(lines: &[String]) -> [&[String]; PART_COUNT] {
    let size = chunk_size(lines.len());
    let mut parts: [&[String]; PART_COUNT] = [&lines[..0]; PART_COUNT];
    if size == 0 {
        return parts;
    }
    for (slot, chunk) in parts.iter_mut().zip(lines.chunks(size)) {
        *slot = chunk;
    }
    parts
}

/// Artifact name of the zero-based part `index`: `{base}_{index + 1}.txt`.
pub fn part_name(base: &str, index: usize) -> String {
    format!("{base}_{}.txt", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("rule{i:02}\n")).collect()
    }

    fn sizes(n: usize) -> [usize; PART_COUNT] {
        let all = lines(n);
        partition(&all).map(|part| part.len())
    }

    #[test]
    fn ten_lines_split_four_four_two() {
        assert_eq!(chunk_size(10), 4);
        assert_eq!(sizes(10), [4, 4, 2]);
    }

    #[test]
    fn evenly_divisible() {
        assert_eq!(sizes(9), [3, 3, 3]);
    }

    #[test]
    fn tiny_inputs_leave_trailing_parts_empty() {
        assert_eq!(sizes(0), [0, 0, 0]);
        assert_eq!(sizes(1), [1, 0, 0]);
        assert_eq!(sizes(2), [1, 1, 0]);
        assert_eq!(sizes(4), [2, 2, 0]);
    }

    #[test]
    fn parts_are_contiguous_and_ordered() {
        let all = lines(7);
        let joined: Vec<String> = partition(&all).iter().flat_map(|p| p.iter().cloned()).collect();
        assert_eq!(joined, all);
    }

    #[test]
    fn part_names_are_one_based() {
        assert_eq!(part_name("adblock", 0), "adblock_1.txt");
        assert_eq!(part_name("adblock", 2), "adblock_3.txt");
    }
}
