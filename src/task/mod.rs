//! Task lifecycle and audit engine.
//!
//! This module validates task state transitions, records human-readable
//! change history on every mutation, enforces soft-delete/restore
//! semantics, and builds the filters used to list tasks. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Input normalisation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
