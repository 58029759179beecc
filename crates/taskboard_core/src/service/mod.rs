//! Core use-case services.
//!
//! # Responsibility
//! - Expose the store access boundary presentation code depends on.
//! - Keep presentation layers decoupled from store internals.

pub mod task_service;
