//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool, passed by reference - no singletons
//! - One transaction per mutation, rollback-on-drop as the default
//! - Affected-row count distinguishes "matched nothing" from "failed"

pub mod pool;
pub mod repos;

pub use pool::{connect, connect_with_options, PoolConfig};
pub use repos::{ClientRepo, SalesRepo};
