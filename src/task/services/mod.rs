//! Orchestration services for the task lifecycle engine.

pub mod lifecycle;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
