//! Bounded input acquisition.
//!
//! The reader is binary-transparent: it stops at end-of-stream and nowhere
//! else. It never pulls more than `limit + 1` bytes from the source, which is
//! enough to tell an input of exactly `limit` bytes from one that's too large.

use crate::Error;
use core::cmp;
use std::io;
use std::io::prelude::*;

// Same size coreutils and blake2_bin read with.
const CHUNK_LEN: usize = 32768;

/// An owned byte buffer that refuses to grow past a fixed limit.
#[derive(Clone, Debug)]
pub struct InputBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl InputBuffer {
    pub fn new(limit: usize) -> InputBuffer {
        InputBuffer {
            bytes: Vec::new(),
            limit,
        }
    }

    /// Append `input`, or fail without modifying the buffer if that would
    /// take the length past the limit.
    pub fn extend(&mut self, input: &[u8]) -> Result<(), Error> {
        if input.len() > self.remaining() {
            return Err(Error::InputTooLarge { limit: self.limit });
        }
        self.bytes.extend_from_slice(input);
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.bytes.len()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Read `reader` to end-of-stream into a new `InputBuffer` capped at `limit`.
pub fn read_input<R: Read>(mut reader: R, limit: usize) -> Result<InputBuffer, Error> {
    let mut input = InputBuffer::new(limit);
    let mut buf = [0; CHUNK_LEN];
    loop {
        // Ask for at most one byte past the limit, so an oversized stream is
        // caught without draining it.
        let want = cmp::min(buf.len(), input.remaining().saturating_add(1));
        match reader.read(&mut buf[..want]) {
            Ok(0) => return Ok(input),
            Ok(n) => input.extend(&buf[..n])?,
            Err(e) => {
                if e.kind() != io::ErrorKind::Interrupted {
                    return Err(Error::Read(e));
                }
            }
        }
    }
}
