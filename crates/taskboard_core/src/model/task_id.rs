//! Task identifier generation.
//!
//! # Responsibility
//! - Define the opaque task identifier type.
//! - Provide pluggable generators for fresh identifiers.
//!
//! # Invariants
//! - A generator never returns the same id twice. Stores trust it and keep
//!   no record of ids they handed out.

use uuid::Uuid;

/// Stable identifier for one task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Source of fresh task identifiers.
///
/// Implementations must never repeat an id over the generator's lifetime,
/// including ids of tasks that were since deleted. A store draws exactly one
/// id per added task and does not check it against earlier ones.
pub trait TaskIdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Random UUID v4 generator. Default for stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTaskIdGenerator;

impl TaskIdGenerator for RandomTaskIdGenerator {
    fn next_id(&mut self) -> TaskId {
        Uuid::new_v4()
    }
}

/// Monotonic counter encoded as a UUID.
///
/// Deterministic output for tests and demos. Starts at 1 so the nil UUID is
/// never issued.
#[derive(Debug, Clone, Copy)]
pub struct SequentialTaskIdGenerator {
    next: u128,
}

impl SequentialTaskIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u128) -> Self {
        Self { next: first.max(1) }
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.checked_add(1).unwrap_or(1);
        id
    }
}
