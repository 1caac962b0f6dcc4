//! Room partition with cached per-room scores.

use crate::error::{SolverError, SolverResult};
use crate::model::matrix::{CompatibilityMatrix, StudentId};
use crate::sa::{PairSwap, SingleSwap};

/// A fixed-capacity room: an ordered member list plus its cached score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    members: Vec<StudentId>,
    score: i64,
}

impl Room {
    /// The members in room order.
    pub fn members(&self) -> &[StudentId] {
        &self.members
    }

    /// The cached pairwise score of the current membership.
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// Aggregate score statistics across all rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Sum of all room scores.
    pub sum: i64,
    /// Lowest room score.
    pub min: i64,
    /// Highest room score.
    pub max: i64,
    /// Mean room score.
    pub mean: f64,
}

/// Sum of `score(a, b)` over all unordered pairs of `members`.
///
/// The single source of truth for room scoring; cached room scores are
/// always produced by this function, never updated incrementally.
pub fn pair_score(matrix: &CompatibilityMatrix, members: &[StudentId]) -> SolverResult<i64> {
    let mut sum = 0;
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            sum += matrix.score(a, b)?;
        }
    }
    Ok(sum)
}

/// A partition of students `1..=N` into rooms of exactly `capacity`
/// members each.
///
/// The partition never changes shape during a run: accepted moves exchange
/// members between rooms in place, they never add or remove. Each room
/// carries a cached score that is replaced atomically with every
/// membership change.
#[derive(Debug, Clone)]
pub struct RoomAssignment {
    rooms: Vec<Room>,
    capacity: usize,
}

impl RoomAssignment {
    /// The deterministic starting assignment: students `1..=N` in strict
    /// ascending order, `capacity` per room, room `i` receiving
    /// `[i*capacity + 1, (i+1)*capacity]`.
    ///
    /// Fails with [`SolverError::Data`] if `capacity` is zero or does not
    /// divide the population.
    pub fn ordered(matrix: &CompatibilityMatrix, capacity: usize) -> SolverResult<Self> {
        let students = matrix.students();
        if capacity == 0 {
            return Err(SolverError::Data("room capacity must be positive".into()));
        }
        if students % capacity != 0 {
            return Err(SolverError::Data(format!(
                "population {students} is not a multiple of room capacity {capacity}"
            )));
        }
        let mut rooms = Vec::with_capacity(students / capacity);
        for first in (1..=students).step_by(capacity) {
            let members: Vec<StudentId> = (first..first + capacity).collect();
            let score = pair_score(matrix, &members)?;
            rooms.push(Room { members, score });
        }
        Ok(Self { rooms, capacity })
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Members per room.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Population size N.
    pub fn students(&self) -> usize {
        self.rooms.len() * self.capacity
    }

    /// All rooms in order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Members of the room at `room`.
    pub fn members(&self, room: usize) -> &[StudentId] {
        self.rooms[room].members()
    }

    /// Cached score of the room at `room`.
    pub fn score(&self, room: usize) -> i64 {
        self.rooms[room].score
    }

    /// The room index a student currently lives in.
    ///
    /// Every student must resolve to exactly one room; failure here is an
    /// [`SolverError::InvariantViolation`], not a user error.
    pub fn room_of(&self, student: StudentId) -> SolverResult<usize> {
        self.rooms
            .iter()
            .position(|room| room.members.contains(&student))
            .ok_or_else(|| {
                SolverError::InvariantViolation(format!(
                    "student {student} is not assigned to any room"
                ))
            })
    }

    /// The position of `student` within the room at `room`.
    pub fn index_in_room(&self, student: StudentId, room: usize) -> SolverResult<usize> {
        self.rooms
            .get(room)
            .and_then(|r| r.members.iter().position(|&m| m == student))
            .ok_or_else(|| {
                SolverError::InvariantViolation(format!(
                    "student {student} is not a member of room {room}"
                ))
            })
    }

    /// Score statistics across all rooms.
    pub fn summary(&self) -> ScoreSummary {
        let mut sum = 0;
        let mut min = i64::MAX;
        let mut max = i64::MIN;
        for room in &self.rooms {
            sum += room.score;
            min = min.min(room.score);
            max = max.max(room.score);
        }
        ScoreSummary {
            sum,
            min,
            max,
            mean: sum as f64 / self.rooms.len() as f64,
        }
    }

    /// Applies a fully evaluated single-student exchange.
    ///
    /// Membership and both cached scores change together; no partial
    /// update is ever visible.
    pub fn apply_single_swap(&mut self, mv: &SingleSwap) {
        self.rooms[mv.room_a].members[mv.pos_a] = mv.student_b;
        self.rooms[mv.room_b].members[mv.pos_b] = mv.student_a;
        self.rooms[mv.room_a].score = mv.score_a;
        self.rooms[mv.room_b].score = mv.score_b;
    }

    /// Applies a fully evaluated pair exchange, installing the candidate
    /// room contents and scores computed at proposal time.
    pub fn apply_pair_swap(&mut self, mv: PairSwap) {
        self.rooms[mv.room_a].members = mv.members_a;
        self.rooms[mv.room_b].members = mv.members_b;
        self.rooms[mv.room_a].score = mv.score_a;
        self.rooms[mv.room_b].score = mv.score_b;
    }

    /// Re-checks the partition and score-cache invariants from scratch.
    ///
    /// Fails with [`SolverError::InvariantViolation`] if any room's size
    /// drifted from the capacity, any student is missing or duplicated, or
    /// any cached score disagrees with the recomputed pairwise sum.
    pub fn validate(&self, matrix: &CompatibilityMatrix) -> SolverResult<()> {
        let students = self.students();
        if students != matrix.students() {
            return Err(SolverError::InvariantViolation(format!(
                "assignment covers {} students, matrix covers {}",
                students,
                matrix.students()
            )));
        }
        let mut seen = vec![false; students + 1];
        for (idx, room) in self.rooms.iter().enumerate() {
            if room.members.len() != self.capacity {
                return Err(SolverError::InvariantViolation(format!(
                    "room {} holds {} members, expected {}",
                    idx,
                    room.members.len(),
                    self.capacity
                )));
            }
            for &member in &room.members {
                if member < 1 || member > students {
                    return Err(SolverError::InvariantViolation(format!(
                        "room {idx} holds unknown student {member}"
                    )));
                }
                if seen[member] {
                    return Err(SolverError::InvariantViolation(format!(
                        "student {member} appears in more than one room"
                    )));
                }
                seen[member] = true;
            }
            let expected = pair_score(matrix, &room.members)?;
            if room.score != expected {
                return Err(SolverError::InvariantViolation(format!(
                    "room {} caches score {}, recomputed {}",
                    idx, room.score, expected
                )));
            }
        }
        Ok(())
    }
}
