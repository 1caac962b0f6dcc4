//! Simulated annealing search core.
//!
//! A single-solution trajectory search over room assignments. Candidate
//! moves exchange students between two distinct rooms, either one student
//! at a time or as a fixed position pattern. Worsening moves are accepted
//! with a probability that shrinks as the temperature cools, letting the
//! search escape local optima early and settle late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod moves;
mod runner;

pub use config::AnnealConfig;
pub use moves::{Move, MoveGenerator, PairSwap, SingleSwap};
pub use runner::{AnnealResult, AnnealRunner};
