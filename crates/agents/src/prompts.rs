//! System prompts and user-turn templates for every agent.
//!
//! The labels named here (`HYPOTHESIS:`, `RATIONALE:`, `WINNER:`, ...) are
//! the contract with [`research_core::parse`]; change both together.

use research_core::{Hypothesis, ResearchGoal, SearchResult};
use std::collections::BTreeMap;

pub const GENERATION: &str = "\
You are a creative but rigorous scientist. Given the research goal, propose one novel, specific, testable hypothesis.
Answer with HYPOTHESIS: (1-3 sentences) followed by RATIONALE: (3-6 bullet points).
Name precise experimental knobs and ground the novelty in prior art.";

pub const REFLECTION: &str = "\
Act as a critical reviewer of the hypothesis below. Produce the labeled sections
STRENGTHS: (3-5 bullets)
WEAKNESSES: (3-5 bullets)
RISKS: (2-4 bullets)
PROPOSED TESTS: (3-6 bullets, with controls, measurable endpoints and expected ranges)
Separate sections with a blank line. Cite web snippets sparingly when provided.";

pub const PAIRWISE_DEBATE: &str = "\
Two hypotheses, A and B, address the same goal. Pick the better one for near-term validation,
judging novelty, plausibility, clarity, testability and fit to the constraints.
Respond with:
WINNER: A or B
REASONING: short bullets, including any decisive weakness of the loser.";

pub const EVOLUTION: &str = "\
Evolve the winning hypothesis using the tournament feedback.
Return one or two refined variants, one per line, that keep the core idea but improve testability or novelty.
Keep details concrete: measurable conditions, concentrations, cell lines, datasets.";

pub const PROXIMITY: &str = "\
Score how well the hypothesis matches the research goal and its constraints, from 0 to 100.
Start with the number, then give a one-line justification.";

pub const META_REVIEW: &str = "\
Summarize the top hypotheses as a research overview in valid Markdown:
- Problem framing
- Shortlist with a one-line pitch, risk and mitigation, and first experiment for each
- Materials and methods sketch
- Ethical and safety checks, if relevant
- Next decisions for the scientist in the loop";

/// Number of web results worked into a reflection prompt
pub const REFLECTION_SNIPPETS: usize = 3;
/// Longest snippet kept per web result, in characters
pub const SNIPPET_CHARS: usize = 400;
/// Characters of the hypothesis used in the web query
pub const QUERY_CHARS: usize = 128;

pub fn generation_user(goal: &ResearchGoal) -> String {
    format!(
        "Research goal: {}\nConstraints: {}\nPreferences: {}",
        goal.text,
        render_map(&goal.constraints),
        render_map(&goal.preferences)
    )
}

pub fn reflection_user(
    goal: &ResearchGoal,
    hypothesis: &Hypothesis,
    snippets: &[SearchResult],
) -> String {
    let context = if snippets.is_empty() {
        "(no web snippets)".to_string()
    } else {
        snippets
            .iter()
            .map(|s| format!("- {}\n{}\n{}", s.title, s.url, s.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    };
    format!(
        "Research goal: {}\nHypothesis: {}\nRationale: {}\nWeb snippets:\n{}",
        goal.text, hypothesis.text, hypothesis.rationale, context
    )
}

pub fn web_query(goal: &ResearchGoal, hypothesis: &Hypothesis) -> String {
    format!(
        "{} hypothesis context: {}",
        goal.text,
        truncate_chars(&hypothesis.text, QUERY_CHARS)
    )
}

pub fn debate_user(goal: &ResearchGoal, a: &Hypothesis, b: &Hypothesis) -> String {
    format!(
        "Goal: {}\nA: {}\nRATIONALE: {}\nB: {}\nRATIONALE: {}",
        goal.text, a.text, a.rationale, b.text, b.rationale
    )
}

pub fn evolution_user(base: &Hypothesis, patterns: &[String]) -> String {
    format!(
        "Base hypothesis: {}\nRationale: {}\nTournament patterns: {}",
        base.text,
        base.rationale,
        patterns.join("; ")
    )
}

pub fn proximity_user(goal: &ResearchGoal, hypothesis: &Hypothesis) -> String {
    format!("Goal: {}\nHypothesis: {}", goal.text, hypothesis.text)
}

pub fn meta_review_user(goal: &ResearchGoal, shortlist: &[Hypothesis]) -> String {
    let lines = shortlist
        .iter()
        .map(|h| format!("- {} (gen {})", h.text, h.generation))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Goal: {}\nShortlist:\n{}", goal.text, lines)
}

/// First `max` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn render_map(map: &BTreeMap<String, String>) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    map.iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "prompts_tests.rs"]
mod prompts_tests;
