use std::path::Path;

use tracing::debug;

use scram_types::InputLine;

use crate::config::InputConfig;
use crate::error::{InputError, InputResult};

/// Validated, indexed input strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSet {
    lines: Vec<InputLine>,
}

impl InputSet {
    /// Trim, filter and validate raw lines.
    ///
    /// Blank lines are skipped and do not consume a case index. A kept line
    /// outside the configured bounds fails with [`InputError::LineLength`],
    /// reporting its physical line number. No kept line at all fails with
    /// [`InputError::Empty`].
    pub fn from_lines<I, S>(lines: I, config: &InputConfig) -> InputResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;

        let mut kept = Vec::new();
        for (i, raw) in lines.into_iter().enumerate() {
            let line_number = i + 1;
            let text = raw.as_ref().trim();
            if text.is_empty() {
                debug!(line = line_number, "blank input line; skipping");
                continue;
            }

            let length = text.chars().count();
            if !(config.min_line_length..=config.max_line_length).contains(&length) {
                return Err(InputError::LineLength {
                    line_number,
                    length,
                    min: config.min_line_length,
                    max: config.max_line_length,
                });
            }

            kept.push(InputLine {
                index: kept.len() + 1,
                text: text.to_owned(),
            });
        }

        if kept.is_empty() {
            return Err(InputError::Empty);
        }

        debug!(cases = kept.len(), "input lines loaded");
        Ok(Self { lines: kept })
    }

    /// Read a UTF-8 file and validate its lines with [`InputSet::from_lines`].
    pub fn from_file(path: impl AsRef<Path>, config: &InputConfig) -> InputResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(contents.lines(), config)
    }

    /// The indexed lines, in input order.
    pub fn lines(&self) -> &[InputLine] {
        &self.lines
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<InputLine> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trims_and_indexes() {
        let set = InputSet::from_lines(["  scrambled ", "", "example"], &InputConfig::default()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.lines()[0], InputLine { index: 1, text: "scrambled".into() });
        assert_eq!(set.lines()[1], InputLine { index: 2, text: "example".into() });
    }

    #[test]
    fn too_short_line_reports_physical_line_number() {
        let err = InputSet::from_lines(["scrambled", "", "x"], &InputConfig::default()).unwrap_err();
        match err {
            InputError::LineLength { line_number, length, min, .. } => {
                assert_eq!(line_number, 3);
                assert_eq!(length, 1);
                assert_eq!(min, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn too_long_line_is_rejected() {
        let config = InputConfig::new(2, 5).unwrap();
        assert!(matches!(
            InputSet::from_lines(["scrambled"], &config),
            Err(InputError::LineLength { length: 9, .. })
        ));
    }

    #[test]
    fn blank_input_is_empty_error() {
        let err = InputSet::from_lines(["", "   "], &InputConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::Empty));
        let none: [&str; 0] = [];
        assert!(matches!(InputSet::from_lines(none, &InputConfig::default()), Err(InputError::Empty)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = InputConfig { min_line_length: 9, max_line_length: 1 };
        assert!(matches!(
            InputSet::from_lines(["abc"], &config),
            Err(InputError::InvalidConfig(_))
        ));
    }

    #[test]
    fn from_file_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "scrambled|example\r\nnothing\n").unwrap();
        drop(file);

        let set = InputSet::from_file(&path, &InputConfig::default()).unwrap();
        let texts: Vec<&str> = set.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["scrambled|example", "nothing"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputSet::from_file(dir.path().join("nope.txt"), &InputConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
