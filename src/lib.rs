//! Taskledger: task lifecycle management with a full audit trail.
//!
//! This crate provides the core engine behind a task service: validated
//! creation and updates, a guarded status workflow, reversible soft
//! deletion, and an append-only history recording every observable change.
//!
//! # Architecture
//!
//! Taskledger follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! The surrounding HTTP layer is expected to construct a
//! [`task::services::TaskLifecycleService`] over a repository adapter and a
//! clock at startup, and to translate
//! [`task::services::TaskLifecycleError`] values into responses using
//! their message and HTTP status.

pub mod task;
