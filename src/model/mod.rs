//! Problem data: the compatibility matrix and the room partition.
//!
//! Both structures are owned by the caller; the search core only reads the
//! matrix and mutates the assignment through accepted moves.

mod assignment;
mod matrix;

pub use assignment::{pair_score, Room, RoomAssignment, ScoreSummary};
pub use matrix::{CompatibilityMatrix, StudentId};
