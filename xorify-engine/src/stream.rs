//! Lock-step streaming XOR
//!
//! [`XorStream`] reads matched chunks from two inputs, XORs them and appends
//! the result to the output. Neither input is ever buffered beyond one chunk,
//! so unbounded and unseekable sources such as stdin work unchanged.

use crate::config::{EngineConfig, LengthPolicy};
use crate::error::{Result, Side, XorError};
use crate::kernel::xor_in_place;
use std::io::{self, Read, Write};

/// Engine state
///
/// `Running` is initial; `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Reading, XOR-ing and writing in lock-step
    Running,
    /// An input signaled end-of-data and the output has been flushed
    Done {
        /// The input that ran out first
        exhausted: Side,
    },
    /// An I/O error aborted the operation
    Failed {
        /// The failing input, or `None` for the output
        side: Option<Side>,
        /// Kind of the I/O error
        kind: io::ErrorKind,
    },
}

impl EngineState {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EngineState::Running)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorSummary {
    /// Bytes appended to the output
    pub bytes_written: u64,
    /// The input that signaled end-of-data first
    pub exhausted: Side,
    /// Policy the run used
    pub policy: LengthPolicy,
}

/// Streaming XOR over two readers and a writer
pub struct XorStream<A, B, W> {
    first: A,
    second: B,
    out: W,
    policy: LengthPolicy,
    buf_a: Vec<u8>,
    buf_b: Vec<u8>,
    state: EngineState,
    bytes_written: u64,
    /// Set under `ZeroPad` once an input has ended and the other is being copied
    draining: Option<Side>,
}

impl<A: Read, B: Read, W: Write> XorStream<A, B, W> {
    /// Create a running engine over the given handles
    pub fn new(first: A, second: B, out: W, config: &EngineConfig) -> Self {
        let chunk_size = config.effective_chunk_size();
        Self {
            first,
            second,
            out,
            policy: config.length_policy,
            buf_a: vec![0u8; chunk_size],
            buf_b: vec![0u8; chunk_size],
            state: EngineState::Running,
            bytes_written: 0,
            draining: None,
        }
    }

    /// Current state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Bytes appended to the output so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Give the handles back to the caller
    pub fn into_inner(self) -> (A, B, W) {
        (self.first, self.second, self.out)
    }

    /// Process one lock-step chunk
    ///
    /// A terminal engine performs no I/O and reports its state unchanged.
    /// On error the engine moves to [`EngineState::Failed`].
    pub fn step(&mut self) -> Result<EngineState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        match self.advance() {
            Ok(next) => {
                self.state = next;
                Ok(next)
            }
            Err(err) => {
                self.state = EngineState::Failed {
                    side: err.side(),
                    kind: err.io_kind(),
                };
                log::debug!(
                    "xor stream failed after {} bytes: {}",
                    self.bytes_written,
                    err
                );
                Err(err)
            }
        }
    }

    /// Step until an input is exhausted or an error occurs
    pub fn run(&mut self) -> Result<XorSummary> {
        loop {
            match self.step()? {
                EngineState::Running => continue,
                EngineState::Done { exhausted } => {
                    return Ok(XorSummary {
                        bytes_written: self.bytes_written,
                        exhausted,
                        policy: self.policy,
                    })
                }
                // Only reachable when an earlier `step` already failed
                EngineState::Failed { side, kind } => {
                    let source = io::Error::from(kind);
                    return Err(match side {
                        Some(side) => XorError::Read { side, source },
                        None => XorError::Write { source },
                    });
                }
            }
        }
    }

    fn advance(&mut self) -> Result<EngineState> {
        if let Some(ended) = self.draining {
            return self.drain(ended);
        }

        let n_a = read_some(&mut self.first, &mut self.buf_a).map_err(|source| XorError::Read {
            side: Side::First,
            source,
        })?;
        if n_a == 0 {
            return self.exhausted(Side::First);
        }

        let n_b = fill(&mut self.second, &mut self.buf_b[..n_a]).map_err(|source| {
            XorError::Read {
                side: Side::Second,
                source,
            }
        })?;

        xor_in_place(&mut self.buf_a[..n_b], &self.buf_b[..n_b]);
        // Under ZeroPad the unmatched tail of A is already its own XOR with zero
        let len = match self.policy {
            LengthPolicy::ZeroPad => n_a,
            LengthPolicy::Truncate => n_b,
        };
        self.emit(len)?;
        log::trace!("xor chunk: read {n_a}/{n_b} bytes, wrote {len}");

        if n_b < n_a {
            return self.exhausted(Side::Second);
        }
        Ok(EngineState::Running)
    }

    /// Copy the remaining input verbatim after the other one ended
    fn drain(&mut self, ended: Side) -> Result<EngineState> {
        let remaining = ended.other();
        let n = match remaining {
            Side::First => read_some(&mut self.first, &mut self.buf_a),
            Side::Second => read_some(&mut self.second, &mut self.buf_a),
        }
        .map_err(|source| XorError::Read {
            side: remaining,
            source,
        })?;

        if n == 0 {
            return self.finish(ended);
        }
        self.emit(n)?;
        Ok(EngineState::Running)
    }

    fn exhausted(&mut self, side: Side) -> Result<EngineState> {
        match self.policy {
            LengthPolicy::Truncate => self.finish(side),
            LengthPolicy::ZeroPad => {
                log::debug!("{side} exhausted, copying the rest of the {}", side.other());
                self.draining = Some(side);
                Ok(EngineState::Running)
            }
        }
    }

    fn finish(&mut self, exhausted: Side) -> Result<EngineState> {
        self.out
            .flush()
            .map_err(|source| XorError::Write { source })?;
        log::debug!(
            "xor stream done: {} bytes written, {exhausted} exhausted first",
            self.bytes_written
        );
        Ok(EngineState::Done { exhausted })
    }

    fn emit(&mut self, len: usize) -> Result<()> {
        self.out
            .write_all(&self.buf_a[..len])
            .map_err(|source| XorError::Write { source })?;
        self.bytes_written += len as u64;
        Ok(())
    }
}

/// XOR two streams with the default configuration
pub fn xor_streams<A: Read, B: Read, W: Write>(first: A, second: B, out: W) -> Result<XorSummary> {
    xor_streams_with(first, second, out, &EngineConfig::default())
}

/// XOR two streams with an explicit configuration
pub fn xor_streams_with<A: Read, B: Read, W: Write>(
    first: A,
    second: B,
    out: W,
    config: &EngineConfig,
) -> Result<XorSummary> {
    XorStream::new(first, second, out, config).run()
}

/// Single read, reissued on `Interrupted`
fn read_some<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}

/// Read until `buf` is full or the reader signals end-of-data
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
