//! Prompts for the enrichment engine.
//!
//! Substitution happens in a single `format!` pass, so page text that
//! happens to contain a placeholder-looking token is never re-substituted.

/// Build the tag-classification prompt.
///
/// The model is told the full label set; its answer is still filtered
/// against the taxonomy afterwards, so the prompt is a hint, not a gate.
pub fn format_tag_prompt(title: &str, description: &str, url: &str) -> String {
    format!(
        "Analyze this webpage content and select the most appropriate tags from these categories: Image, Video, News, Blog, Music, Social Media Post. Return only the relevant tags as a comma-separated list.\n\
         \n\
         Title: {title}\n\
         Description: {description}\n\
         URL: {url}"
    )
}

/// Build the summary prompt.
pub fn format_summary_prompt(title: &str, description: &str) -> String {
    format!(
        "Create a concise 2-3 sentence summary of this webpage:\n\
         \n\
         Title: {title}\n\
         Description: {description}"
    )
}
