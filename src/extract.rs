//! Code Extractor
//!
//! Converts the model's raw reply into a plain executable script body by
//! removing code-fence marker lines. Everything else (comments, blank
//! lines, indentation) passes through untouched. Extraction is total and
//! idempotent: the output contains no fence markers left to strip.

/// Strip fence-marker lines from a model reply.
///
/// A marker line is an opening fence (optionally tagged with a language
/// name, e.g. ```` ```python ````) or a bare closing fence, standing alone
/// on its line. Replies without fences pass through unchanged.
pub fn extract_code(reply: &str) -> String {
    reply
        .lines()
        .filter(|line| !is_fence_marker(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_fence_marker(line: &str) -> bool {
    match line.trim().strip_prefix("```") {
        Some(tag) => tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '_' | '.')),
        None => false,
    }
}
