//! Simulated Annealing (SA) for the 0/1 knapsack problem.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The search is single-threaded and deterministic given a fixed seed:
//! every stochastic step (bit flip, repair removal, acceptance draw)
//! consumes the shared generator in a fixed order.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), acceptance criterion

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
