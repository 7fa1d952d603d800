//! Core library for the flatfile task tracker
//!
//! This crate contains the storage layer backing the REST API:
//! - Task model and id generation
//! - File-backed task record store

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
