//! The 0/1 knapsack problem domain.
//!
//! An instance is a capacity plus parallel profit/weight sequences; a
//! solution is a per-item selection vector. The instance is immutable
//! once constructed and owns all evaluation semantics (cost, weight,
//! feasibility) so the annealer never touches raw item data.

mod instance;
mod loader;

pub use instance::{Instance, Solution};
pub use loader::{list_instances, load_instance};
