/// Maximum length kept from a user question before it is embedded in a prompt.
pub const MAX_QUERY_LEN: usize = 2_000;

/// Instruction used when no transcript or description text was collected.
#[must_use]
pub fn title_only_prompt(title_list: &str) -> String {
    format!("Generate an engaging article using these video titles: {title_list}.")
}

/// Instruction embedding both the titles and the aggregated video text.
#[must_use]
pub fn content_summary_prompt(title_list: &str, joined_text: &str) -> String {
    format!("Write a high-quality summary for these videos: {title_list}.\n\n{joined_text}")
}

/// Picks the summary instruction based on whether any text was gathered.
#[must_use]
pub fn summary_prompt(joined_text: &str, title_list: &str) -> String {
    if joined_text.trim().is_empty() {
        title_only_prompt(title_list)
    } else {
        content_summary_prompt(title_list, joined_text)
    }
}

#[must_use]
pub fn research_prompt(query: &str) -> String {
    format!(
        "Answer this question and suggest related questions: {}",
        sanitize_query(query)
    )
}

/// Strip control characters (keeping newlines and tabs) and hard-truncate.
#[must_use]
pub fn sanitize_query(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .take(MAX_QUERY_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}
