//! crmctl-core - transactional CRUD layer over an embedded SQLite store
//!
//! This crate provides:
//! - **models**: the `Client` and `Sale` record types
//! - **db::pool**: a bounded sqlx connection pool over a database file
//! - **db::repos**: parameterized query and mutation operations, each
//!   mutation wrapped in an explicit transaction
//! - **error**: the structured [`DbError`] taxonomy
//!
//! The store's schema is assumed to pre-exist; this crate runs no
//! migrations and builds no indexes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crmctl_core::{db, ClientRepo, NewClient};
//!
//! let pool = db::connect("demo.db").await?;
//! let clients = ClientRepo::new(&pool);
//! let id = clients.insert(&new_client).await?;
//! let client = clients.get(id).await?;
//! ```

pub mod db;
pub mod error;
pub mod models;

pub use db::{connect, connect_with_options, ClientRepo, PoolConfig, SalesRepo};
pub use error::{DbError, Result};
pub use models::{Client, NewClient, Sale};
