use crate::core::FeedPlan;

/// Splits after every `\n`, keeping the terminator on its line. A final
/// fragment without `\n` is still a line; empty input has no lines.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    content.split_inclusive(|&b| b == b'\n').collect()
}

pub fn plan_feed(content: &[u8], num_headers: usize) -> FeedPlan {
    let lines = split_lines(content);
    let split_at = num_headers.min(lines.len());
    let (header, body) = lines.split_at(split_at);

    FeedPlan {
        header: header.concat(),
        header_lines: header.len(),
        body: body.iter().map(|line| line.to_vec()).collect(),
    }
}
