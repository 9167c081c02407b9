//! Round orchestration for co-scientist runs
//!
//! A run owns one [`RoundState`] and walks the [`Phase`] machine:
//! generate once, then reflect, rank and rescale by proximity each round,
//! evolving between rounds and finishing with a meta-review.

pub mod config;
pub mod driver;
pub mod error;
pub mod machine;
pub mod params;
pub mod phases;
pub mod report;
pub mod state;

pub use config::{AppConfig, ModelSection};
pub use driver::{Orchestrator, RunOutcome};
pub use error::{RunError, RunResult};
pub use machine::{Phase, RunTrace};
pub use params::RunParams;
pub use report::{FinalReport, ShortlistEntry};
pub use state::RoundState;
