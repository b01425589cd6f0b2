//! Validated dictionary for scrambled string matching.
//!
//! A [`Dictionary`] enforces per-word and cumulative length limits on top of
//! a [`WordStore`], which decides whether canonical keys are computed when a
//! word is inserted or every time one is requested.
//!
//! # Storage Backends
//!
//! All backends implement the [`WordStore`] trait:
//!
//! - [`EagerWordStore`] -- `HashMap` of word to precomputed canonical key
//! - [`LazyWordStore`] -- `HashSet` of words, keys recomputed on lookup
//!
//! [`StorageStrategy`] names a backend so it can be picked from configuration.
//!
//! # Rules
//!
//! 1. Length bounds are checked before duplicates, on every insertion path.
//! 2. The cumulative length is checked after the word is inserted. A word
//!    that pushes the total over the limit is reported but stays in the
//!    dictionary; callers must discard a dictionary whose load failed.
//! 3. Both backends return identical canonical keys for the same word.

pub mod config;
pub mod dictionary;
pub mod eager;
pub mod error;
pub mod lazy;
pub mod strategy;
pub mod traits;

pub use config::DictionaryConfig;
pub use dictionary::Dictionary;
pub use eager::EagerWordStore;
pub use error::{DictionaryError, DictionaryErrorKind, DictionaryResult};
pub use lazy::LazyWordStore;
pub use strategy::StorageStrategy;
pub use traits::WordStore;
