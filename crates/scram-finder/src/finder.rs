//! Sliding-window search for dictionary words and their scrambles.
//!
//! For each dictionary word the finder slides a window of the word's length
//! across the input. A window is only canonicalized when its first and last
//! characters equal the word's, since a scramble keeps both endpoints.
//! Each word counts at most once per input.

use tracing::{debug, info, Span};

use scram_dictionary::Dictionary;
use scram_types::{CanonicalKey, CaseResult, InputLine, Word};

/// A dictionary word decoded once for the whole run.
#[derive(Debug)]
struct Pattern<'d> {
    word: &'d Word,
    chars: Vec<char>,
    key: CanonicalKey,
}

impl Pattern<'_> {
    /// Returns `true` if some window of `input` is the word or a scramble of it.
    fn occurs_in(&self, input: &[char]) -> bool {
        let n = self.chars.len();
        if n == 0 || n > input.len() {
            return false;
        }
        let first = self.chars[0];
        let last = self.chars[n - 1];

        input.windows(n).any(|window| {
            window[0] == first
                && window[n - 1] == last
                && (window == self.chars.as_slice() || CanonicalKey::from_chars(window) == self.key)
        })
    }
}

/// Counts dictionary words occurring, verbatim or scrambled, in input strings.
///
/// The finder borrows the dictionary, so the dictionary cannot be modified
/// while a finder exists. Canonical keys are fetched from the dictionary
/// once per word when the finder is built.
#[derive(Debug)]
pub struct Finder<'d> {
    patterns: Vec<Pattern<'d>>,
    span: Span,
}

impl<'d> Finder<'d> {
    /// Prepare a finder over `dictionary`.
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_span(dictionary, Span::none())
    }

    /// Like [`Finder::new`], emitting events under `span`.
    pub fn with_span(dictionary: &'d Dictionary, span: Span) -> Self {
        let patterns = dictionary
            .words()
            .map(|word| Pattern {
                word,
                chars: word.as_str().chars().collect(),
                key: dictionary.get_canonical_word(word.as_str()),
            })
            .collect();
        Self { patterns, span }
    }

    /// Number of dictionary words searched for.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of dictionary words found at least once in `input`.
    pub fn count_matches(&self, input: &str) -> usize {
        if input.is_empty() || self.patterns.is_empty() {
            return 0;
        }
        let chars: Vec<char> = input.chars().collect();
        self.patterns.iter().filter(|p| p.occurs_in(&chars)).count()
    }

    /// Dictionary words found in `input`, in no particular order.
    pub fn matched_words(&self, input: &str) -> Vec<&'d Word> {
        let chars: Vec<char> = input.chars().collect();
        self.patterns
            .iter()
            .filter(|p| p.occurs_in(&chars))
            .map(|p| p.word)
            .collect()
    }

    /// One result per input, in input order, keeping each line's case index.
    pub fn find_matches(&self, inputs: &[InputLine]) -> Vec<CaseResult> {
        let results: Vec<CaseResult> = inputs
            .iter()
            .map(|line| {
                let count = self.count_matches(&line.text);
                debug!(parent: &self.span, case = line.index, count, "case processed");
                CaseResult::new(line.index, count)
            })
            .collect();

        info!(
            parent: &self.span,
            cases = results.len(),
            words = self.patterns.len(),
            "scrambled string search complete"
        );
        results
    }

    /// Like [`Finder::find_matches`] for plain strings, numbered from 1.
    pub fn find_matches_in<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<CaseResult> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, text)| CaseResult::new(i + 1, self.count_matches(text.as_ref())))
            .collect()
    }
}

/// Count matches for every input against `dictionary`.
///
/// Shorthand for `Finder::new(dictionary).find_matches(inputs)`.
pub fn find_matches(inputs: &[InputLine], dictionary: &Dictionary) -> Vec<CaseResult> {
    Finder::new(dictionary).find_matches(inputs)
}
