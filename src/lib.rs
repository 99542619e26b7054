//! todos - a local task manager
//!
//! A `TodoStore` owns todos and categories, derives filtered/sorted views and
//! statistics on read, and writes both collections to a local key-value store
//! after every mutation.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod id;
pub mod storage;
pub mod store;
pub mod tui;

pub use error::{Result, TodoError};
