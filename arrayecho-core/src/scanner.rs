//! Whitespace-delimited token scanning over buffered input
//!
//! Tokens follow the classic scanner boundaries: any run of ASCII
//! whitespace separates tokens, and a token is the maximal run of
//! non-whitespace bytes.

use std::io::BufRead;

use log::trace;

use crate::error::{Error, Result};

/// Pulls whitespace-delimited integer tokens from a buffered input stream
pub struct TokenScanner<R> {
    inner: R,
}

impl<R: BufRead> TokenScanner<R> {
    /// Creates a scanner over the given input stream
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next whitespace-delimited token
    ///
    /// # Returns
    ///
    /// * `Ok(Some(token))` - the next token on the stream
    /// * `Ok(None)` - the stream ended before any token byte was seen
    /// * `Err(Error::Io)` - the underlying stream faulted
    pub fn next_token(&mut self) -> Result<Option<String>> {
        let mut token: Vec<u8> = Vec::new();
        loop {
            // Scan one buffered chunk; the borrow on the chunk must end
            // before consume() advances the stream.
            let (used, terminated) = {
                let chunk = self.inner.fill_buf().map_err(Error::from)?;
                if chunk.is_empty() {
                    break;
                }
                scan_chunk(chunk, &mut token)
            };
            self.inner.consume(used);
            if terminated {
                break;
            }
        }
        if token.is_empty() {
            return Ok(None);
        }
        let token = String::from_utf8(token)
            .map_err(|err| Error::MalformedToken(String::from_utf8_lossy(err.as_bytes()).into_owned()))?;
        trace!("scanned token {:?}", token);
        Ok(Some(token))
    }

    /// Reads the next token and parses it as a signed 64-bit integer
    ///
    /// A token that is present but does not parse (including one out
    /// of `i64` range) is a malformed token, not end-of-stream.
    pub fn next_int(&mut self) -> Result<Option<i64>> {
        let token = match self.next_token()? {
            Some(token) => token,
            None => return Ok(None),
        };
        match token.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(Error::MalformedToken(token)),
        }
    }
}

/// Walks one buffered chunk, appending token bytes to `token`
///
/// Returns how many bytes of the chunk were used and whether the token
/// was terminated by trailing whitespace inside the chunk.
fn scan_chunk(chunk: &[u8], token: &mut Vec<u8>) -> (usize, bool) {
    let mut used = 0;
    for &byte in chunk {
        used += 1;
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                // still skipping leading whitespace
                continue;
            }
            return (used, true);
        }
        token.push(byte);
    }
    (used, false)
}
