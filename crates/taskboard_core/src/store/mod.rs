//! Canonical in-memory task storage.
//!
//! # Responsibility
//! - Own the ordered task collection and mediate every mutation.
//! - Hand readers owned snapshots instead of references into storage.
//!
//! # Invariants
//! - Insertion order is preserved; the store never reorders.
//! - Ids are unique over the store lifetime, including deleted ones.
//! - Unknown ids on update/delete are no-ops.

pub mod task_store;
