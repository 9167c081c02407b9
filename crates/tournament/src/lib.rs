//! Tournament ranking for co-scientist runs
//!
//! This crate provides:
//! - An Elo rating store for hypotheses
//! - Seeded, reproducible pairing of a population into disjoint matches
//! - A tournament runner that judges each pair and projects ratings back
//!   onto the hypotheses as their score
//! - Summaries and reports of the matches played in a round

mod elo;
mod match_runner;
mod pairing;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use pairing::*;
pub use results::*;
