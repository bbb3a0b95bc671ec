//! Persistence adapters for the task lifecycle engine.
//!
//! Concrete implementations of the [`TaskRepository`] port, following
//! hexagonal architecture principles. Adapters handle all infrastructure
//! concerns while the domain remains pure.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage for
//!   unit testing and embedding
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM
//!
//! [`TaskRepository`]: crate::task::ports::repository::TaskRepository

pub mod memory;
pub mod postgres;
