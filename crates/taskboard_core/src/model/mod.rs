//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record held by the store.
//! - Provide boundary validation for caller-supplied task input.
//! - Define identifier generation contracts.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused.
//! - A `TaskTitle` is always trimmed, non-empty and at most 100 chars.
//! - Deletion is permanent; there is no tombstone state.

pub mod task;
pub mod task_id;
