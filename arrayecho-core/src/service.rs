//! The array echo pipeline
//!
//! A strict linear pipeline: validate the requested size, fill a
//! sequence of exactly that many integers from input, and echo it back
//! unchanged, one element per line. Executed exactly once per service;
//! there is no retry and no state carried between runs.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::scanner::TokenScanner;
use crate::sequence::IntSequence;

/// Prompt printed before the size token is read (no trailing newline)
pub const SIZE_PROMPT: &str = "input size of the array: ";
/// Prompt printed before the elements are read
pub const FILL_PROMPT: &str = "input array:\n";
/// Header printed before the elements are echoed back
pub const EMIT_HEADER: &str = "your array:\n";

/// Single-pass service that validates a requested size, fills an
/// integer sequence from input, and emits it unchanged
///
/// Generic over the input and output streams so the whole pipeline
/// runs against in-memory buffers in tests exactly as it runs against
/// stdin/stdout in the binary.
pub struct ArrayEchoService<R, W> {
    input: TokenScanner<R>,
    output: W,
}

impl<R: BufRead, W: Write> ArrayEchoService<R, W> {
    /// Creates a service over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenScanner::new(input),
            output,
        }
    }

    /// Runs the whole pipeline exactly once: prompts, size, fill, echo
    ///
    /// # Returns
    ///
    /// * `Result<()>` - success, or the first terminal error
    pub fn run(&mut self) -> Result<()> {
        self.write_str(SIZE_PROMPT)?;
        // The size prompt has no newline; push it out before blocking
        // on input.
        self.output.flush().map_err(Error::from)?;
        let size = self.acquire_size()?;
        self.write_str(FILL_PROMPT)?;
        let sequence = self.fill(size)?;
        self.write_str(EMIT_HEADER)?;
        self.emit(&sequence)
    }

    /// Reads and validates the requested sequence length
    ///
    /// The size token must parse as an integer and be strictly greater
    /// than zero. Missing, non-numeric, and non-positive tokens all
    /// fail with [`Error::InvalidSize`]; there is no retry.
    pub fn acquire_size(&mut self) -> Result<usize> {
        let value = match self.input.next_int() {
            Ok(Some(value)) => value,
            Ok(None) => {
                warn!("size token missing");
                return Err(Error::InvalidSize("size token missing".to_string()));
            }
            Err(Error::MalformedToken(token)) => {
                warn!("size token {:?} is not an integer", token);
                return Err(Error::InvalidSize(format!("not an integer: {:?}", token)));
            }
            Err(err) => return Err(err),
        };
        if value <= 0 {
            warn!("rejected non-positive size {}", value);
            return Err(Error::InvalidSize(format!("must be positive, got {}", value)));
        }
        debug!("acquired size {}", value);
        // A size past the address space is a resource failure, never a
        // silent truncation.
        usize::try_from(value).map_err(|_| Error::OutOfMemory(value as u64))
    }

    /// Reads exactly `size` integers into a fully-populated sequence
    ///
    /// Fails fast: end-of-stream before `size` tokens yields
    /// [`Error::InsufficientInput`], a non-integer token yields
    /// [`Error::MalformedToken`], and no partial sequence ever escapes.
    /// A zero `size` is rejected with [`Error::InvalidSize`], so the
    /// sequence invariant `len > 0` holds for every sequence built here.
    /// Backing storage is reserved once, fallibly, so an absurd size
    /// surfaces as [`Error::OutOfMemory`] instead of an abort.
    pub fn fill(&mut self, size: usize) -> Result<IntSequence> {
        if size == 0 {
            return Err(Error::InvalidSize("must be positive, got 0".to_string()));
        }
        let mut elements: Vec<i64> = Vec::new();
        elements
            .try_reserve_exact(size)
            .map_err(|_| Error::OutOfMemory(size as u64))?;
        for count in 0..size {
            match self.input.next_int()? {
                Some(value) => elements.push(value),
                None => {
                    warn!("input ended after {} of {} elements", count, size);
                    return Err(Error::InsufficientInput {
                        expected: size,
                        got: count,
                    });
                }
            }
        }
        debug!("filled sequence of {} elements", size);
        Ok(IntSequence::from_elements(elements))
    }

    /// Writes each element on its own line, in original order
    pub fn emit(&mut self, sequence: &IntSequence) -> Result<()> {
        for value in sequence.iter() {
            writeln!(self.output, "{}", value).map_err(Error::from)?;
        }
        debug!("emitted {} elements", sequence.len());
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn service<'a>(
        input: &str,
        output: &'a mut Vec<u8>,
    ) -> ArrayEchoService<Cursor<Vec<u8>>, &'a mut Vec<u8>> {
        ArrayEchoService::new(Cursor::new(input.as_bytes().to_vec()), output)
    }

    #[test]
    fn test_acquire_size_accepts_positive() {
        let mut output = Vec::new();
        let mut service = service("5", &mut output);
        assert_eq!(service.acquire_size().unwrap(), 5);
    }

    #[test]
    fn test_acquire_size_rejects_zero_and_negative() {
        for input in ["0", "-3"] {
            let mut output = Vec::new();
            let mut service = service(input, &mut output);
            assert!(matches!(service.acquire_size(), Err(Error::InvalidSize(_))));
        }
    }

    #[test]
    fn test_acquire_size_rejects_missing_and_non_numeric() {
        for input in ["", "five"] {
            let mut output = Vec::new();
            let mut service = service(input, &mut output);
            assert!(matches!(service.acquire_size(), Err(Error::InvalidSize(_))));
        }
    }

    #[test]
    fn test_fill_exact_count_in_order() {
        let mut output = Vec::new();
        let mut service = service("10 20 30", &mut output);
        let sequence = service.fill(3).unwrap();
        assert_eq!(sequence.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_fill_reports_short_input() {
        let mut output = Vec::new();
        let mut service = service("10 20", &mut output);
        assert_eq!(
            service.fill(3).unwrap_err(),
            Error::InsufficientInput { expected: 3, got: 2 }
        );
    }

    #[test]
    fn test_fill_reports_malformed_token() {
        let mut output = Vec::new();
        let mut service = service("10 x", &mut output);
        assert_eq!(service.fill(2).unwrap_err(), Error::MalformedToken("x".to_string()));
    }

    #[test]
    fn test_emit_one_line_per_element() {
        let mut output = Vec::new();
        {
            let mut service = service("", &mut output);
            let sequence = IntSequence::from_elements(vec![1, -2, 3]);
            service.emit(&sequence).unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "1\n-2\n3\n");
    }
}
