//! Prompt Builder
//!
//! Assembles the text payload sent to the model: a fixed manifest of the
//! automation primitives the generated script may call, a truncated excerpt
//! of the sanitized page, the user's scenario, and the output-format
//! constraints. Pure string composition with no error path.

/// Default cap on the page-content excerpt, in characters. A hard cutoff
/// keeps the prompt inside the model's context budget; overridable via
/// `Config::page_char_budget`.
pub const DEFAULT_PAGE_CHAR_BUDGET: usize = 8192;

/// The automation primitives available to generated scripts, with their
/// call signatures. These belong to the generated script's runtime, not to
/// this tool.
const TOOL_MANIFEST: &str = "\
- async click(selector) -> None: click the element matched by a CSS selector
- async fill(selector, text) -> None: replace the value of an input element
- async select(selector, option) -> None: choose an option in a dropdown
- async check(selector) -> None: check a checkbox or radio button
- async screenshot(path) -> None: capture the current viewport to a file
- async wait_for_selector(selector) -> None: wait until an element is attached";

/// Compose the complete prompt from sanitized markup and a scenario.
///
/// Section order is fixed: tools, page content, task, requirements. The
/// markup excerpt is cut off at `page_char_budget` characters.
pub fn build_prompt(sanitized_html: &str, scenario: &str, page_char_budget: usize) -> String {
    let excerpt = truncate_chars(sanitized_html, page_char_budget);
    format!(
        "[AVAILABLE TOOLS]\n\
         {TOOL_MANIFEST}\n\
         \n\
         [CURRENT PAGE CONTENT]\n\
         {excerpt}\n\
         \n\
         [TASK]\n\
         Write a Playwright test script for the following requirement:\n\
         {scenario}\n\
         \n\
         [REQUIREMENT]\n\
         - use Python async/await syntax\n\
         - wait explicitly for elements before interacting with them\n\
         - handle potential exceptions with try/except blocks\n\
         - output code only, with no markdown fencing or prose\n\
         - always print the test result (pass or fail)\n"
    )
}

/// Cut a string off after `max_chars` characters, on a character boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_budget() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_budget() {
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_over_budget() {
        let long = "x".repeat(10_000);
        let cut = truncate_chars(&long, DEFAULT_PAGE_CHAR_BUDGET);
        assert_eq!(cut.chars().count(), DEFAULT_PAGE_CHAR_BUDGET);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let s = "日本語テキスト";
        let cut = truncate_chars(s, 3);
        assert_eq!(cut, "日本語");
    }

    #[test]
    fn test_embedded_excerpt_length_equals_budget() {
        let markup = "a".repeat(9000);
        let prompt = build_prompt(&markup, "scenario", 8192);

        let start = prompt.find("[CURRENT PAGE CONTENT]\n").unwrap()
            + "[CURRENT PAGE CONTENT]\n".len();
        let end = prompt[start..].find("\n\n[TASK]").unwrap();
        assert_eq!(end, 8192);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let prompt = build_prompt("<p>page</p>", "do the thing", 8192);
        let tools = prompt.find("[AVAILABLE TOOLS]").unwrap();
        let content = prompt.find("[CURRENT PAGE CONTENT]").unwrap();
        let task = prompt.find("[TASK]").unwrap();
        let requirement = prompt.find("[REQUIREMENT]").unwrap();
        assert!(tools < content);
        assert!(content < task);
        assert!(task < requirement);
    }

    #[test]
    fn test_scenario_included_verbatim() {
        let scenario = "1. open page\n2. fill search box\n3. click submit";
        let prompt = build_prompt("<p></p>", scenario, 8192);
        assert!(prompt.contains(scenario));
    }

    #[test]
    fn test_manifest_lists_all_primitives() {
        let prompt = build_prompt("", "", 8192);
        for primitive in ["click", "fill", "select", "check", "screenshot", "wait_for_selector"] {
            assert!(prompt.contains(primitive), "manifest missing {}", primitive);
        }
    }
}
