//! Best-effort extraction of structured values from collaborator free text.
//!
//! Every function here is total: when the expected label or marker is
//! missing the result falls back to a documented default and a warning is
//! logged. Nothing in this module returns an error.

use regex::RegexBuilder;
use serde_json::Value;
use tracing::warn;

use crate::types::{SearchResult, Side, Verdict};

pub const HYPOTHESIS_LABEL: &str = "HYPOTHESIS:";
pub const RATIONALE_MARKER: &str = "RATIONALE:";
pub const REASONING_MARKER: &str = "REASONING:";

/// Proximity used when the scorer's reply contains no number.
pub const DEFAULT_PROXIMITY: u32 = 50;

/// Maximum number of variants taken from one evolution reply.
pub const MAX_VARIANTS: usize = 2;

/// Section labels a reflection reply is expected to contain.
pub const STRENGTHS: &str = "STRENGTHS";
pub const WEAKNESSES: &str = "WEAKNESSES";
pub const RISKS: &str = "RISKS";
pub const PROPOSED_TESTS: &str = "PROPOSED TESTS";

/// Split a generation reply into `(hypothesis, rationale)`.
///
/// The hypothesis is everything before the first `RATIONALE:` with any
/// `HYPOTHESIS:` label removed. The rationale is everything after the last
/// `RATIONALE:`, or the whole reply when the marker is absent.
pub fn parse_generation(text: &str) -> (String, String) {
    let head = text.split(RATIONALE_MARKER).next().unwrap_or_default();
    let hypothesis = head.replace(HYPOTHESIS_LABEL, "").trim().to_string();
    let rationale = text
        .rsplit(RATIONALE_MARKER)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    if !text.contains(RATIONALE_MARKER) {
        warn!("generation reply has no {} marker", RATIONALE_MARKER);
    }
    (hypothesis, rationale)
}

/// Extract the itemized lines of a labeled section.
///
/// Matches the first case-insensitive `TAG:` and takes everything up to the
/// next blank line (or the end of the text). A missing section is an empty list.
pub fn parse_section(text: &str, tag: &str) -> Vec<String> {
    let pattern = format!(r"{}:(.*?)(?:\n\n|$)", regex::escape(tag));
    let re = match RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            warn!("invalid section pattern for {}: {}", tag, e);
            return Vec::new();
        }
    };

    match re.captures(text).and_then(|caps| caps.get(1)) {
        Some(body) => item_lines(body.as_str()).collect(),
        None => {
            warn!("no {} section found in review", tag);
            Vec::new()
        }
    }
}

/// Interpret a pairwise judgment.
///
/// `WINNER: A` wins over `WINNER: B` when both appear; neither marker means A.
pub fn parse_verdict(text: &str) -> Verdict {
    let winner = if text.contains("WINNER: A") {
        Side::A
    } else if text.contains("WINNER: B") {
        Side::B
    } else {
        warn!("judge reply has no winner marker, defaulting to A");
        Side::A
    };
    let reasoning = text
        .rsplit(REASONING_MARKER)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    Verdict { winner, reasoning }
}

/// First number (one to three digits) in the reply, clamped into `[0, 100]`.
pub fn parse_proximity(text: &str) -> u32 {
    let found = RegexBuilder::new("[0-9]{1,3}")
        .build()
        .ok()
        .and_then(|re| re.find(text).map(|m| m.as_str().to_string()))
        .and_then(|digits| digits.parse::<u32>().ok());

    match found {
        Some(value) => value.min(100),
        None => {
            warn!("proximity reply has no number, defaulting to {}", DEFAULT_PROXIMITY);
            DEFAULT_PROXIMITY
        }
    }
}

/// Variant statements from an evolution reply, one per non-empty line.
pub fn parse_variants(text: &str) -> Vec<String> {
    item_lines(text).take(MAX_VARIANTS).collect()
}

/// Web-lookup results from a reply that should hold a JSON array of
/// `{title, url, snippet}` objects, possibly wrapped in prose.
pub fn parse_search_results(text: &str, k: usize) -> Vec<SearchResult> {
    let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) else {
        warn!("no JSON array in search reply");
        return Vec::new();
    };
    if end <= start {
        warn!("no JSON array in search reply");
        return Vec::new();
    }

    let items: Vec<Value> = match serde_json::from_str(&text[start..=end]) {
        Ok(items) => items,
        Err(e) => {
            warn!("failed to parse search results: {}", e);
            return Vec::new();
        }
    };

    let field = |item: &Value, key: &str| {
        item.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| SearchResult {
            title: field(item, "title"),
            url: field(item, "url"),
            content: field(item, "snippet"),
        })
        .take(k)
        .collect()
}

fn item_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_matches(|c: char| c == '-' || c == '•' || c == ' ')
                .to_string()
        })
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod parse_tests;
