//! Roommate grouping by simulated annealing.
//!
//! Assigns a fixed population of students into fixed-size rooms so that
//! the summed pairwise compatibility inside each room is as good as the
//! search can make it. The crate is organized around three concerns:
//!
//! - **`model`**: the immutable pairwise [`model::CompatibilityMatrix`]
//!   and the mutable [`model::RoomAssignment`] partition with its cached
//!   per-room scores.
//! - **`sa`**: the annealing core — [`sa::MoveGenerator`] proposes
//!   single-student and pattern exchanges between rooms,
//!   [`sa::AnnealRunner`] drives the temperature-controlled accept/reject
//!   loop until the acceptance rate collapses.
//! - **`io`**: the thin collaborators that parse the compatibility table
//!   and render the final report.
//!
//! # Examples
//!
//! ```
//! use room_anneal::model::CompatibilityMatrix;
//! use room_anneal::sa::{AnnealConfig, AnnealRunner};
//!
//! let matrix = CompatibilityMatrix::uniform(8, 1).unwrap();
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(10.0)
//!     .with_min_temperature(1.0)
//!     .with_cooling_factor(0.5)
//!     .with_accepts_per_cooling(50)
//!     .with_seed(42);
//! let result = AnnealRunner::run(&matrix, &config).unwrap();
//! assert_eq!(result.assignment.room_count(), 2);
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod sa;
