//! Pure assessment engine for the AI implementation journey planner.
//!
//! Every function in this crate is synchronous and side-effect free: it
//! reads the caller's collections (tasks, workflows, plan) and returns new
//! values without mutating its inputs, touching I/O, or holding state.
//! Given identical inputs the engine produces identical outputs, so calls
//! are safe from any number of threads.
//!
//! Module map:
//! - [`scoring`] -- the canonical 0-10 AI-potential formula
//! - [`characteristics`] -- capability needs derived from a task set
//! - [`workflow_analysis`] -- per-workflow insight aggregation
//! - [`planning`] -- phased implementation-plan generation
//! - [`catalog`] / [`tool_matching`] -- builtin tool catalog and ranking
//! - [`charts`] -- chart-ready data shapes for the visualization layer
//! - [`journey`] -- wizard steps and overall progress tracking

pub mod catalog;
pub mod characteristics;
pub mod charts;
pub mod error;
pub mod journey;
pub mod model;
pub mod planning;
pub mod scoring;
pub mod tool_matching;
pub mod types;
pub mod workflow_analysis;
