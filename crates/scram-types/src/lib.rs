//! Foundation types for scrambled string matching.
//!
//! This crate provides the value types shared by every other `scram-*`
//! crate. It has no knowledge of dictionaries or configuration.
//!
//! # Key Types
//!
//! - [`CanonicalKey`]: First and last character fixed, interior sorted by code point
//! - [`Word`]: Non-empty dictionary word with its cached character length
//! - [`InputLine`]: One indexed input string (a "case")
//! - [`CaseResult`]: Match count for one case, rendered as `Case #i: n`

pub mod canonical;
pub mod case;
pub mod error;
pub mod word;

pub use canonical::{canonical, CanonicalKey};
pub use case::{CaseResult, InputLine};
pub use error::TypeError;
pub use word::Word;
