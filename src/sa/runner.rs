//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Build a greedy initial solution (profit/weight ratio order)
//! 2. Derive the initial temperature from the mean cost of one
//!    neighborhood of that solution
//! 3. Outer loop (while above the temperature floor and under the
//!    stagnation limit): restart the working solution from the best
//!    known one, then run `max_inner_iterations` neighborhood passes,
//!    accepting candidates by the Metropolis criterion and cooling
//!    once per pass
//! 4. Return the best solution and its cost

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::error::Error;
use crate::knapsack::{Instance, Solution};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SaResult {
    /// The best solution found. Always feasible.
    pub best: Solution,

    /// Profit of the best solution.
    pub best_cost: u64,

    /// Every new best in the order it was found, with its cost.
    /// Costs are strictly increasing.
    pub improvements: Vec<(Solution, u64)>,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves that improved on the best known cost.
    pub improving_moves: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs one annealing search over the instance.
    ///
    /// Fails with [`Error::Config`] before any search state is created
    /// if the configuration is invalid. Otherwise always returns a
    /// feasible best solution.
    pub fn run(instance: &Instance, config: &SaConfig) -> Result<SaResult, Error> {
        config.validate()?;

        let n = instance.len();
        if n == 0 {
            // Nothing to select and nothing to perturb.
            return Ok(SaResult {
                best: Vec::new(),
                best_cost: 0,
                improvements: Vec::new(),
                iterations: 0,
                accepted_moves: 0,
                improving_moves: 0,
                final_temperature: 0.0,
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Neighborhood size is fixed for the whole run.
        let k = neighborhood_size(n);

        let mut best = greedy_initial(instance);
        let mut temperature = initial_temperature(instance, &best, k, &mut rng);
        let mut best_cost = instance.cost(&best);
        let mut improvements: Vec<(Solution, u64)> = Vec::new();
        let mut no_improve_count = 0usize;

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature && no_improve_count < config.no_improve_limit {
            // Restart each outer pass from the best known point.
            let mut solution = best.clone();
            let mut cost = best_cost;

            for _ in 0..config.max_inner_iterations {
                let neighbors = generate_neighbors(instance, &solution, k, &mut rng);
                for neighbor in neighbors {
                    let neighbor_cost = instance.cost(&neighbor);
                    iterations += 1;

                    if accept(cost, neighbor_cost, temperature, &mut rng) {
                        solution = neighbor;
                        cost = neighbor_cost;
                        accepted_moves += 1;

                        if cost > best_cost {
                            best = solution.clone();
                            best_cost = cost;
                            improvements.push((best.clone(), best_cost));
                            improving_moves += 1;
                            no_improve_count = 0;
                        } else {
                            // Counted per accepted non-improving move,
                            // not per pass.
                            no_improve_count += 1;
                        }
                    }
                }

                temperature = cool(temperature, config.cooling_rate);
            }
        }

        Ok(SaResult {
            best,
            best_cost,
            improvements,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}

/// Number of neighbors generated per pass: 15% of the item count,
/// at least one.
fn neighborhood_size(n: usize) -> usize {
    1.max((n as f64 * 0.15) as usize)
}

/// Greedy construction: rank items by profit/weight ratio descending,
/// ties broken by original index, then fill while capacity allows.
/// Feasible by construction.
fn greedy_initial(instance: &Instance) -> Solution {
    let n = instance.len();
    let profit = instance.profit();
    let weight = instance.weight();

    let mut order: Vec<usize> = (0..n).collect();
    // Exact ratio comparison via cross-multiplication; a stable sort
    // keeps equal ratios in index order.
    order.sort_by(|&a, &b| {
        let lhs = profit[a] as u128 * weight[b] as u128;
        let rhs = profit[b] as u128 * weight[a] as u128;
        rhs.cmp(&lhs)
    });

    let mut solution = vec![false; n];
    let mut total = 0u64;
    for i in order {
        if total + weight[i] <= instance.capacity() {
            solution[i] = true;
            total += weight[i];
        }
    }
    solution
}

/// Initial temperature: mean cost over one neighborhood of the starting
/// solution, falling back to 1 if the neighborhood is empty.
fn initial_temperature(
    instance: &Instance,
    solution: &Solution,
    k: usize,
    rng: &mut impl Rng,
) -> f64 {
    let neighbors = generate_neighbors(instance, solution, k, rng);
    if neighbors.is_empty() {
        return 1.0;
    }
    let total: u64 = neighbors.iter().map(|nb| instance.cost(nb)).sum();
    total as f64 / neighbors.len() as f64
}

/// Generates exactly `k` feasible perturbations of `solution`.
///
/// Each neighbor flips one uniformly random bit, then repairs any
/// capacity violation by deselecting uniformly random selected items
/// until the weight fits (or nothing is left to drop). One RNG draw per
/// flip and one per removal.
fn generate_neighbors(
    instance: &Instance,
    solution: &Solution,
    k: usize,
    rng: &mut impl Rng,
) -> Vec<Solution> {
    let n = solution.len();
    let mut neighbors = Vec::with_capacity(k);
    for _ in 0..k {
        let mut neighbor = solution.clone();
        let i = rng.random_range(0..n);
        neighbor[i] = !neighbor[i];

        let mut total = instance.total_weight(&neighbor);
        while total > instance.capacity() {
            let selected: Vec<usize> = (0..n).filter(|&j| neighbor[j]).collect();
            if selected.is_empty() {
                break;
            }
            let j = selected[rng.random_range(0..selected.len())];
            neighbor[j] = false;
            total -= instance.weight()[j];
        }
        neighbors.push(neighbor);
    }
    neighbors
}

/// Metropolis acceptance: strict improvements always pass, worsening
/// moves pass with probability `exp(delta / T)`. Requires `T > 0`,
/// which the outer loop condition guarantees.
fn accept(current_cost: u64, candidate_cost: u64, temperature: f64, rng: &mut impl Rng) -> bool {
    if candidate_cost > current_cost {
        return true;
    }
    let delta = candidate_cost as f64 - current_cost as f64;
    let probability = (delta / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}

/// Modified Lundy-Mees cooling: `T' = T / (1 + rate * sqrt(T))`.
/// Strictly decreasing for positive `T` and `rate`, with step size
/// shrinking as the temperature falls.
fn cool(temperature: f64, cooling_rate: f64) -> f64 {
    temperature / (1.0 + cooling_rate * temperature.sqrt())
}
