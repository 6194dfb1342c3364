//! Streaming byte-wise XOR of two inputs
//!
//! This crate computes `out[i] = a[i] ^ b[i]` over two readers in lock-step,
//! one chunk at a time, so inputs of unknown or unbounded length (pipes,
//! stdin) are handled without buffering them. Identical bytes come out as
//! `0x00`, which makes the output a map of where two binary files differ.
//!
//! By default the output stops at the shorter input
//! ([`LengthPolicy::Truncate`]); [`LengthPolicy::ZeroPad`] continues to the
//! longer one instead.
//!
//! # Example
//!
//! ```rust
//! use xorify_engine::{xor_streams, Side};
//!
//! let a: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF];
//! let b: &[u8] = &[0x0F, 0x0F];
//! let mut out = Vec::new();
//!
//! let summary = xor_streams(a, b, &mut out).unwrap();
//! assert_eq!(out, vec![0xF0, 0xF0]);
//! assert_eq!(summary.bytes_written, 2);
//! assert_eq!(summary.exhausted, Side::Second);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod kernel;
pub mod stream;

// Re-export key types
pub use config::{EngineConfig, LengthPolicy, DEFAULT_CHUNK_SIZE};
pub use error::{Result, Side, XorError};
pub use kernel::{xor_bytes, xor_in_place};
pub use stream::{xor_streams, xor_streams_with, EngineState, XorStream, XorSummary};
