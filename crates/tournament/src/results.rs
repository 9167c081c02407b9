//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};

/// A single judged match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub a_id: String,
    pub b_id: String,
    pub winner_id: String,
    pub loser_id: String,
    pub reasoning: String,
}

/// Everything one ranking round produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub round_index: u32,
    /// Matches in pairing order
    pub results: Vec<MatchResult>,
    /// Judge reasoning, one entry per match, fed to evolution verbatim
    pub patterns: Vec<String>,
}

impl TournamentSummary {
    pub fn new(round_index: u32) -> Self {
        Self {
            round_index,
            results: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Record a match and its reasoning as a pattern
    pub fn add_match(&mut self, result: MatchResult) {
        self.patterns.push(result.reasoning.clone());
        self.results.push(result);
    }

    /// Wins recorded for a hypothesis in this round
    pub fn wins(&self, id: &str) -> usize {
        self.results.iter().filter(|m| m.winner_id == id).count()
    }

    /// Generate a markdown report of the round
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("### Tournament round {}\n\n", self.round_index));

        if self.results.is_empty() {
            report.push_str("No matches were played.\n");
            return report;
        }

        report.push_str("| A | B | Winner | Reasoning |\n");
        report.push_str("|---|---|---|---|\n");
        for entry in &self.results {
            report.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                short(&entry.a_id),
                short(&entry.b_id),
                short(&entry.winner_id),
                one_line(&entry.reasoning)
            ));
        }

        report
    }
}

fn short(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn one_line(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "/")
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
