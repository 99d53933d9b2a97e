//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use eyre::{Result, eyre};

use crate::{CodeSink, OutputStream};

/// Which sink operation a [`FailingSink`] should fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Open,
    Append,
    Close,
}

/// Sink whose streams fail on a chosen operation.
///
/// Counts every operation so tests can check what a generator attempted.
#[derive(Debug)]
pub struct FailingSink {
    fail_on: FailOn,
    pub opened: usize,
    pub appended: usize,
    pub closed: usize,
}

impl FailingSink {
    pub fn new(fail_on: FailOn) -> Self {
        Self {
            fail_on,
            opened: 0,
            appended: 0,
            closed: 0,
        }
    }
}

impl CodeSink for FailingSink {
    fn open(&mut self, _package: &str, _file_name: &str) -> Result<Box<dyn OutputStream + '_>> {
        self.opened += 1;
        if self.fail_on == FailOn::Open {
            return Err(eyre!("cannot open output"));
        }
        Ok(Box::new(FailingStream { sink: self }))
    }
}

struct FailingStream<'a> {
    sink: &'a mut FailingSink,
}

impl OutputStream for FailingStream<'_> {
    fn append(&mut self, _text: &str) -> Result<()> {
        self.sink.appended += 1;
        if self.sink.fail_on == FailOn::Append {
            return Err(eyre!("cannot append to output"));
        }
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        let FailingStream { sink } = *self;
        sink.closed += 1;
        if sink.fail_on == FailOn::Close {
            return Err(eyre!("cannot close output"));
        }
        Ok(())
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        if diff.is_empty() {
            diff.push_str("  (contents differ only in line endings)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputUnit;

    #[test]
    fn test_failing_sink_open() {
        let mut sink = FailingSink::new(FailOn::Open);
        assert!(OutputUnit::open(&mut sink, "p", "F").is_err());
        assert_eq!(sink.opened, 1);
        assert_eq!(sink.closed, 0);
    }

    #[test]
    fn test_failing_sink_close_on_drop() {
        let mut sink = FailingSink::new(FailOn::Append);
        {
            let mut unit = OutputUnit::open(&mut sink, "p", "F").unwrap();
            assert!(unit.append("x").is_err());
        }
        assert_eq!(sink.appended, 1);
        assert_eq!(sink.closed, 1);
    }

    #[test]
    fn test_assert_content_eq_passes() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }
}
