//! Input strings for scrambled string matching.
//!
//! Lines are trimmed, blank lines are dropped, and the remaining lines are
//! checked against [`InputConfig`] and numbered from 1 in the order they
//! appear.

pub mod config;
pub mod error;
pub mod reader;

pub use config::InputConfig;
pub use error::{InputError, InputResult};
pub use reader::InputSet;
