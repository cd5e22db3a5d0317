//! Simulated Annealing solver for the 0/1 knapsack problem.
//!
//! Given a capacity and per-item profit/weight pairs, the solver picks a
//! subset of items maximizing total profit without exceeding capacity.
//! It is a metaheuristic: it returns a good feasible solution, not a
//! proven optimum.
//!
//! - **`knapsack`**: problem instance, solution representation,
//!   cost/weight evaluation, and a plain-text instance loader.
//! - **`sa`**: the annealer — greedy construction, bit-flip neighborhood
//!   with capacity repair, Metropolis acceptance, and a modified
//!   Lundy-Mees cooling schedule.
//!
//! # Example
//!
//! ```
//! use knapsack_anneal::knapsack::Instance;
//! use knapsack_anneal::sa::{SaConfig, SaRunner};
//!
//! let instance = Instance::new(10, vec![60, 100, 120], vec![10, 20, 30]).unwrap();
//! let config = SaConfig::default().with_seed(42);
//! let result = SaRunner::run(&instance, &config).unwrap();
//! assert!(instance.is_feasible(&result.best));
//! ```

pub mod error;
pub mod knapsack;
pub mod sa;

pub use error::Error;
