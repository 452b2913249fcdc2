//! JSONL reading operations.
//!
//! Provides async, buffered, line-by-line reading of JSONL files with
//! 1-based line number tracking so parse failures can be reported against
//! the source file.

use crate::error::Result;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Async reader for JSONL (JSON Lines) data.
///
/// Wraps an async reader in a [`BufReader`] and deserializes one value per
/// line. Empty lines are skipped. Line numbering is 1-based: the counter
/// starts at 0 and increments as each line is consumed, so after a
/// successful or failed parse [`JsonlReader::line_number`] names the line
/// that was just read.
pub struct JsonlReader<R> {
    /// Buffered reader wrapping the underlying async reader.
    reader: BufReader<R>,
    /// Current line number (0 before any lines are read).
    line_number: usize,
}

impl<R: AsyncRead + Unpin> JsonlReader<R> {
    /// Creates a new `JsonlReader` wrapping the given async reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Returns the line number of the last line read (0 before any reads).
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next non-empty line and deserialize it.
    ///
    /// Returns `Ok(None)` at end of input. On a JSON parse failure the line
    /// has already been consumed, so the caller may continue reading - this
    /// is what makes resilient loading possible.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the underlying reader fails and
    /// [`crate::Error::Json`] if a line is not valid JSON for `T`.
    pub async fn read_line<T>(&mut self) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = self.reader.read_line(&mut line).await?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Ok(Some(serde_json::from_str(trimmed)?));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde::Deserialize;
    use std::io::Cursor;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: u32,
    }

    #[test]
    fn new_reader_starts_at_line_zero() {
        let reader = JsonlReader::new(Cursor::new(b""));
        assert_eq!(reader.line_number(), 0);
    }

    #[tokio::test]
    async fn read_line_returns_records_in_order() {
        let data = Cursor::new(b"{\"id\":1}\n{\"id\":2}\n".to_vec());
        let mut reader = JsonlReader::new(data);

        assert_eq!(reader.read_line::<Record>().await.unwrap(), Some(Record { id: 1 }));
        assert_eq!(reader.read_line::<Record>().await.unwrap(), Some(Record { id: 2 }));
        assert_eq!(reader.read_line::<Record>().await.unwrap(), None);
        assert_eq!(reader.line_number(), 2);
    }

    #[tokio::test]
    async fn read_line_skips_empty_lines_but_counts_them() {
        let data = Cursor::new(b"\n\n{\"id\":5}\n".to_vec());
        let mut reader = JsonlReader::new(data);

        assert_eq!(reader.read_line::<Record>().await.unwrap(), Some(Record { id: 5 }));
        assert_eq!(reader.line_number(), 3);
    }

    #[tokio::test]
    async fn read_line_reports_malformed_json_and_can_continue() {
        let data = Cursor::new(b"not json\n{\"id\":9}\n".to_vec());
        let mut reader = JsonlReader::new(data);

        let err = reader.read_line::<Record>().await.expect_err("line 1 is not JSON");
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(reader.line_number(), 1);

        assert_eq!(reader.read_line::<Record>().await.unwrap(), Some(Record { id: 9 }));
    }
}
