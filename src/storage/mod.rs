//! Storage Module
//!
//! Persists the most recently analyzed text in an on-disk SQLite database.
//!
//! ## Core Concepts
//! - **Single record**: The table holds at most one meaningful row. Every save replaces it.
//! - **Atomicity**: A save is one transaction (delete all rows, insert the new one), so
//!   readers never observe an empty or doubled table mid-write.
//! - **Durability**: The record survives process restarts; the schema is created on open if absent.

pub mod sqlite;
pub mod types;
