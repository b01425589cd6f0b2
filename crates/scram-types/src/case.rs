use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// One input string tagged with its 1-based case index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLine {
    pub index: usize,
    pub text: String,
}

impl InputLine {
    /// Create an input line. The index must be 1-based.
    pub fn new(index: usize, text: impl Into<String>) -> Result<Self, TypeError> {
        if index == 0 {
            return Err(TypeError::InvalidCaseIndex(index));
        }
        Ok(Self {
            index,
            text: text.into(),
        })
    }

    /// Index a sequence of strings starting at case 1.
    pub fn enumerate<I, S>(lines: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| Self {
                index: i + 1,
                text: text.into(),
            })
            .collect()
    }
}

/// Number of dictionary words found in one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseResult {
    /// 1-based case index.
    pub case: usize,
    /// Dictionary words matched at least once.
    pub count: usize,
}

impl CaseResult {
    pub fn new(case: usize, count: usize) -> Self {
        Self { case, count }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case #{}: {}", self.case, self.count)
    }
}

impl From<(usize, usize)> for CaseResult {
    fn from((case, count): (usize, usize)) -> Self {
        Self { case, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_index_is_rejected() {
        assert_eq!(
            InputLine::new(0, "abc").unwrap_err(),
            TypeError::InvalidCaseIndex(0)
        );
        assert_eq!(InputLine::new(3, "abc").unwrap().index, 3);
    }

    #[test]
    fn enumerate_is_one_based() {
        let lines = InputLine::enumerate(["scrambled", "example"]);
        assert_eq!(lines[0], InputLine { index: 1, text: "scrambled".into() });
        assert_eq!(lines[1].index, 2);
    }

    #[test]
    fn display_format() {
        assert_eq!(CaseResult::new(1, 2).to_string(), "Case #1: 2");
        assert_eq!(CaseResult::from((12, 0)).to_string(), "Case #12: 0");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&CaseResult::new(4, 7)).unwrap();
        assert_eq!(json, r#"{"case":4,"count":7}"#);
    }
}
