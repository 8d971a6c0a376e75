use super::InputError;
use std::io::{BufRead, Read};

/// The default maximum length of a line, terminator excluded.
pub const DEFAULT_MAX_LINE_LEN: usize = 1024;

/// Returns true if `byte` may appear in a line of a tree description.
#[inline(always)]
pub fn is_allowed(byte: u8) -> bool {
    byte == b' ' || byte == b'-' || byte.is_ascii_digit()
}

/// A reader splitting a byte stream into validated lines.
///
/// A line is a possibly empty run of spaces, digits and minus signs
/// terminated by a line feed; a carriage return immediately preceding the
/// line feed is discarded. The last line of the stream may lack its
/// terminator. Any other byte makes the line invalid.
///
/// # Examples
/// ```
/// # use tree_analyzer::parser::LineReader;
/// let mut lines = LineReader::new("2\r\n1\n-".as_bytes());
/// assert_eq!(lines.next_line().unwrap(), Some("2"));
/// assert_eq!(lines.next_line().unwrap(), Some("1"));
/// assert_eq!(lines.next_line().unwrap(), Some("-"));
/// assert_eq!(lines.next_line().unwrap(), None);
/// ```
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    max_line_len: usize,
    /// The number of lines read so far.
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a new line reader accepting lines of at most
    /// [`DEFAULT_MAX_LINE_LEN`] bytes.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            max_line_len: DEFAULT_MAX_LINE_LEN,
            line: 0,
        }
    }

    /// Sets the maximum length of a line, terminator excluded.
    pub fn max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    /// Returns the 1-based number of the last line returned by
    /// [`next_line`](Self::next_line), or 0 if no line has been read.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Reads the next line.
    ///
    /// Returns `Ok(None)` at end of stream, that is, when not even a single
    /// byte could be read. The stream is advanced exactly past the line and
    /// its terminator.
    pub fn next_line(&mut self) -> Result<Option<&str>, InputError> {
        self.buf.clear();
        // Content, carriage return and line feed.
        let limit = self.max_line_len.saturating_add(2) as u64;
        let read = Read::take(&mut self.reader, limit).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        } else if read as u64 == limit {
            return Err(InputError::LineTooLong {
                line: self.line,
                max: self.max_line_len,
            });
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > self.max_line_len {
            return Err(InputError::LineTooLong {
                line: self.line,
                max: self.max_line_len,
            });
        }

        if let Some(column) = self.buf.iter().position(|&b| !is_allowed(b)) {
            return Err(InputError::InvalidCharacter {
                line: self.line,
                column: column + 1,
                byte: self.buf[column],
            });
        }

        Ok(Some(
            std::str::from_utf8(&self.buf).expect("validated lines are ASCII"),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn lines(input: &str) -> Result<Vec<String>, InputError> {
        let mut reader = LineReader::new(input.as_bytes());
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line()? {
            lines.push(line.to_owned());
        }
        Ok(lines)
    }

    #[test]
    fn test_empty_stream() {
        assert!(lines("").unwrap().is_empty());
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(lines("1 2\n-\n").unwrap(), vec!["1 2", "-"]);
        assert_eq!(lines("1 2\r\n-\r\n").unwrap(), vec!["1 2", "-"]);
        assert_eq!(lines("1 2\r\n-").unwrap(), vec!["1 2", "-"]);
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(lines("\n").unwrap(), vec![""]);
        assert_eq!(lines("1\n\n").unwrap(), vec!["1", ""]);
        assert_eq!(lines("\r\n\r\n").unwrap(), vec!["", ""]);
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            lines("1\n2 a\n"),
            Err(InputError::InvalidCharacter {
                line: 2,
                column: 3,
                byte: b'a'
            })
        ));
        assert!(matches!(
            lines("1\t2\n"),
            Err(InputError::InvalidCharacter { line: 1, .. })
        ));
        // A carriage return is only accepted right before the line feed.
        assert!(matches!(
            lines("1\r2\n"),
            Err(InputError::InvalidCharacter { line: 1, .. })
        ));
        assert!(matches!(
            lines("3.5\n"),
            Err(InputError::InvalidCharacter { byte: b'.', .. })
        ));
    }

    #[test]
    fn test_max_line_len() {
        let mut reader = LineReader::new("1234\n12345\n".as_bytes()).max_line_len(4);
        assert_eq!(reader.next_line().unwrap(), Some("1234"));
        assert!(matches!(
            reader.next_line(),
            Err(InputError::LineTooLong { line: 2, max: 4 })
        ));

        let mut reader = LineReader::new("1234\r\n".as_bytes()).max_line_len(4);
        assert_eq!(reader.next_line().unwrap(), Some("1234"));

        let mut reader = LineReader::new("123456789".as_bytes()).max_line_len(4);
        assert!(matches!(
            reader.next_line(),
            Err(InputError::LineTooLong { line: 1, .. })
        ));
    }

    #[test]
    fn test_line_number() {
        let mut reader = LineReader::new("1\n2\n".as_bytes());
        assert_eq!(reader.line_number(), 0);
        reader.next_line().unwrap();
        reader.next_line().unwrap();
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 2);
    }
}
