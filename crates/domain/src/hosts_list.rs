/// Extracts blocked domains from a hosts-format list.
///
/// Only lines that start with `sinkhole_prefix` contribute, and only their
/// second whitespace-separated token. Names are kept as written.
pub fn parse_hosts(text: &str, sinkhole_prefix: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.starts_with(sinkhole_prefix))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}
