//! Task module
//!
//! This module contains the task model, id generation, and the
//! file-backed record store.

mod file_store;
mod id;
mod model;
mod repository;

pub use file_store::FileTaskStore;
pub use id::{IdGenerator, TimestampIdGenerator};
pub use model::*;
pub use repository::TaskRepository;
