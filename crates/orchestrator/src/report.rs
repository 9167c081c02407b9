//! Final run artifact: console rendering and markdown export

use research_core::{top_by_score, Hypothesis, ResearchGoal};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tournament::TournamentSummary;

use crate::error::RunResult;
use crate::state::RoundState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub id: String,
    pub text: String,
    pub score: f64,
    pub generation: u32,
    pub parent_id: Option<String>,
}

impl From<&Hypothesis> for ShortlistEntry {
    fn from(h: &Hypothesis) -> Self {
        Self {
            id: h.id.clone(),
            text: h.text.clone(),
            score: h.score,
            generation: h.generation,
            parent_id: h.parent_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    pub goal: ResearchGoal,
    pub overview: String,
    /// Best hypotheses by score, highest first
    pub shortlist: Vec<ShortlistEntry>,
    pub rounds_completed: u32,
    pub last_tournament: Option<TournamentSummary>,
}

impl FinalReport {
    pub fn from_state(state: &RoundState) -> Self {
        let shortlist = top_by_score(&state.population, state.params.shortlist)
            .iter()
            .map(ShortlistEntry::from)
            .collect();

        Self {
            goal: state.goal.clone(),
            overview: state.overview.clone().unwrap_or_default(),
            shortlist,
            rounds_completed: state.round_index + 1,
            last_tournament: state.tournament.clone(),
        }
    }

    pub fn render_console(&self) -> String {
        let mut out = String::new();
        out.push_str("=== RESEARCH OVERVIEW ===\n");
        out.push_str(self.overview.trim());
        out.push_str("\n\n=== SHORTLIST ===\n");
        for entry in &self.shortlist {
            let _ = writeln!(
                out,
                "- {} (score={:.1}, gen={}, id={})",
                entry.text,
                entry.score,
                entry.generation,
                short(&entry.id)
            );
        }
        out
    }

    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# Research report\n");
        let _ = writeln!(md, "**Goal:** {}\n", self.goal.text);
        let _ = writeln!(md, "Rounds completed: {}\n", self.rounds_completed);

        md.push_str("## Overview\n\n");
        md.push_str(self.overview.trim());
        md.push_str("\n\n## Shortlist\n\n");
        md.push_str("| # | Hypothesis | Score | Gen | Wins | Id | Parent |\n");
        md.push_str("|---|---|---|---|---|---|---|\n");
        for (rank, entry) in self.shortlist.iter().enumerate() {
            // Wins in the last tournament only
            let wins = self
                .last_tournament
                .as_ref()
                .map_or(0, |t| t.wins(&entry.id));
            let _ = writeln!(
                md,
                "| {} | {} | {:.1} | {} | {} | {} | {} |",
                rank + 1,
                entry.text.replace('|', "/"),
                entry.score,
                entry.generation,
                wins,
                short(&entry.id),
                entry.parent_id.as_deref().map(short).unwrap_or("-")
            );
        }

        if let Some(tournament) = &self.last_tournament {
            md.push('\n');
            md.push_str(&tournament.generate_report());
        }
        md
    }

    /// Pretty JSON of the whole report
    pub fn to_json(&self) -> RunResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: &Path) -> RunResult<()> {
        write_file(path, &self.to_json()?)
    }

    pub fn save_markdown(&self, path: &Path) -> RunResult<()> {
        write_file(path, &self.to_markdown())
    }
}

fn write_file(path: &Path, contents: &str) -> RunResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

fn short(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
