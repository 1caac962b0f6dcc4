//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::AnnealConfig;
use super::moves::{Move, MoveGenerator};
use crate::error::{SolverError, SolverResult};
use crate::model::{CompatibilityMatrix, RoomAssignment, ScoreSummary};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The final room assignment.
    pub assignment: RoomAssignment,

    /// Score statistics of the final assignment.
    pub summary: ScoreSummary,

    /// Total number of candidate moves evaluated.
    pub iterations: usize,

    /// Total accepted moves across the run.
    pub accepted_moves: usize,

    /// Total rejected moves across the run.
    pub rejected_moves: usize,

    /// Number of cooling events.
    pub cooling_events: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search from the ordered initial assignment.
    pub fn run(matrix: &CompatibilityMatrix, config: &AnnealConfig) -> SolverResult<AnnealResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is polled once per iteration; a cancelled run still
    /// returns its current assignment with `cancelled` set.
    pub fn run_with_cancel(
        matrix: &CompatibilityMatrix,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolverResult<AnnealResult> {
        config.validate().map_err(SolverError::Config)?;

        let mut assignment = RoomAssignment::ordered(matrix, config.room_capacity)?;
        if assignment.room_count() < 2 {
            return Err(SolverError::Config(
                "annealing needs at least two rooms; both move kinds exchange \
                 members between distinct rooms"
                    .into(),
            ));
        }

        // One generator per run, seeded once. Re-seeding inside the loop
        // would correlate draws.
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let generator = MoveGenerator::new(config.pair_positions.clone());

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_total = 0usize;
        let mut rejected_total = 0usize;
        let mut accepted_in_window = 0usize;
        let mut rejected_in_window = 0usize;
        let mut cooling_events = 0usize;
        let mut cancelled = false;

        info!(
            students = assignment.students(),
            rooms = assignment.room_count(),
            temperature,
            initial_score = assignment.summary().sum,
            "annealing started"
        );

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let mv = generator.propose(&assignment, matrix, &mut rng)?;
            let delta = mv.delta(&assignment);

            if accept_move(delta, temperature, &mut rng) {
                match mv {
                    Move::Single(m) => assignment.apply_single_swap(&m),
                    Move::Pair(m) => assignment.apply_pair_swap(m),
                }
                accepted_in_window += 1;
                accepted_total += 1;
            } else {
                rejected_in_window += 1;
                rejected_total += 1;
            }
            iterations += 1;

            // A full window of rejects with zero accepts means the
            // acceptance rate has collapsed: the search is done.
            if accepted_in_window == 0 && rejected_in_window >= config.rejects_per_cooling {
                break;
            }

            if accepted_in_window >= config.accepts_per_cooling
                || rejected_in_window >= config.rejects_per_cooling
            {
                temperature *= config.cooling_factor;
                cooling_events += 1;
                accepted_in_window = 0;
                rejected_in_window = 0;
                debug!(temperature, cooling_events, iterations, "cooling");
                if temperature <= config.min_temperature {
                    break;
                }
            }
        }

        let summary = assignment.summary();
        info!(
            iterations,
            accepted = accepted_total,
            rejected = rejected_total,
            cooling_events,
            final_temperature = temperature,
            final_score = summary.sum,
            cancelled,
            "annealing finished"
        );

        Ok(AnnealResult {
            assignment,
            summary,
            iterations,
            accepted_moves: accepted_total,
            rejected_moves: rejected_total,
            cooling_events,
            final_temperature: temperature,
            cancelled,
        })
    }
}

/// Metropolis-style acceptance.
///
/// An improving or score-neutral move (`delta >= 0`) is always taken; a
/// worsening move survives with probability `exp(delta / temperature)`,
/// which is below 1 for negative delta, compared against a uniform draw
/// from `[0.1, 1.0)`.
fn accept_move<R: Rng>(delta: i64, temperature: f64, rng: &mut R) -> bool {
    delta >= 0 || rng.random_range(0.1..1.0) < (delta as f64 / temperature).exp()
}
