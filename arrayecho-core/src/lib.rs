//! ArrayEcho Core
//!
//! This crate provides the bounded integer-sequence echo pipeline: it
//! validates a requested size, fills a sequence of exactly that many
//! integers from an input stream, and emits the sequence unchanged.
//!
//! # Architecture
//!
//! The crate is organized into a few small functional domains:
//!
//! - **Error**: the shared error taxonomy and `Result` alias
//! - **Scanner**: whitespace-delimited token scanning over buffered input
//! - **Sequence**: the fixed-length, fully-populated integer buffer
//! - **Service**: the `acquire_size -> fill -> emit` pipeline
//!
//! # Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use arrayecho_core::ArrayEchoService;
//!
//! let mut output = Vec::new();
//! let mut service = ArrayEchoService::new(Cursor::new("3 1 -2 3"), &mut output);
//! service.run()?;
//! # Ok::<(), arrayecho_core::Error>(())
//! ```

// Core modules
pub mod error;
pub mod scanner;
pub mod sequence;
pub mod service;

// Re-export commonly used items
pub use error::{Error, Result};
pub use scanner::TokenScanner;
pub use sequence::IntSequence;
pub use service::{ArrayEchoService, EMIT_HEADER, FILL_PROMPT, SIZE_PROMPT};
