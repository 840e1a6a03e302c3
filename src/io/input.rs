//! Operator input source
//!
//! Sessions read operator input one line at a time, either from stdin or
//! from a script file given on the command line.
//!
//! # Error Handling
//!
//! - Fatal errors (script file not found, unreadable) are returned from
//!   `open_input()`
//! - Read errors while streaming are returned from `next_line()` and end
//!   the session

use crate::types::AppError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open the operator input source
///
/// # Arguments
///
/// * `path` - Script file to read from, or `None` for stdin
///
/// # Returns
///
/// * `Ok(Box<dyn BufRead>)` - A buffered reader over the source
/// * `Err(AppError)` - If the script file could not be opened
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, AppError> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AppError::input_not_found(&path.display().to_string()),
                _ => AppError::Io {
                    message: format!("Failed to open '{}': {}", path.display(), e),
                },
            })?;
            tracing::debug!("Reading operator input from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Line-at-a-time reader over operator input
///
/// Yields each line with its line terminator (`\n` or `\r\n`) removed.
/// Other whitespace is preserved; trimming is up to the consumer.
#[derive(Debug)]
pub struct LineReader<R: BufRead> {
    reader: R,
    line_num: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            line_num: 0,
        }
    }

    /// Read the next line
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - The next line without its terminator
    /// * `Ok(None)` - End of input
    /// * `Err(AppError)` - If reading failed
    pub fn next_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(|e| AppError::Io {
            message: format!("Failed to read input line {}: {}", self.line_num + 1, e),
        })?;
        if read == 0 {
            return Ok(None);
        }

        self.line_num += 1;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Number of lines read so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
