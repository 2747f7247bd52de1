// src/intent/normalize.rs
//! Cleanup applied before a prompt is sent and after an intent comes back.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::ChartIntent;

/// Prompts are truncated to this many characters.
pub const MAX_PROMPT_CHARS: usize = 1000;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Strip markup and braces from a prompt, trim it, and cap its length.
pub fn sanitize_prompt(prompt: &str) -> String {
    let stripped = HTML_TAG.replace_all(prompt, "");
    let cleaned: String = stripped.chars().filter(|c| !matches!(c, '{' | '}')).collect();
    cleaned.trim().chars().take(MAX_PROMPT_CHARS).collect()
}

/// Canonical granularity for common spellings (`"monthly"` -> `"month"`).
pub fn normalize_granularity(granularity: &str) -> Option<&'static str> {
    match granularity.to_lowercase().as_str() {
        "day" | "daily" => Some("day"),
        "week" | "weekly" => Some("week"),
        "month" | "monthly" => Some("month"),
        "quarter" | "quarterly" => Some("quarter"),
        "year" | "yearly" | "annual" => Some("year"),
        _ => None,
    }
}

/// Canonicalize dimension granularities; unrecognized ones are dropped.
pub fn normalize_intent(intent: &mut ChartIntent) {
    for dimension in &mut intent.dimensions {
        dimension.granularity = dimension
            .granularity
            .as_deref()
            .and_then(normalize_granularity)
            .map(str::to_string);
    }
}
