//! Scrambled string search.
//!
//! Given a loaded [`Dictionary`](scram_dictionary::Dictionary), a [`Finder`]
//! counts for each input how many dictionary words occur in it as a
//! contiguous substring, either verbatim or with their interior letters
//! permuted. The search is a pure computation and cannot fail.

pub mod finder;

pub use finder::{find_matches, Finder};
