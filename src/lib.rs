//! A reference test vector generator for the Eaglesong hash function.
//!
//! The pipeline reads a bounded byte stream, hashes it once with a
//! [`HashPrimitive`], and writes the 32-byte digest as one line of lowercase
//! hex. The hash algorithm itself comes from the
//! [`eaglesong`](https://docs.rs/eaglesong) crate. Anything implementing
//! [`HashPrimitive`] can stand in for it, which is how the tests stub it out.
//!
//! # Example
//!
//! ```
//! use eaglesong_vectors::{run, Eaglesong, MAX_INPUT_LEN};
//!
//! let mut output = Vec::new();
//! let digest = run(&Eaglesong, &b"a"[..], &mut output, MAX_INPUT_LEN).unwrap();
//! assert_eq!(output.len(), 65);
//! assert_eq!(&output[..64], digest.to_hex().as_bytes());
//! assert_eq!(output[64], b'\n');
//! ```

use arrayvec::ArrayString;
use core::fmt;
use std::io;
use std::io::prelude::*;

pub mod hex_lower;
pub mod input;


pub use input::{read_input, InputBuffer};

/// The length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;
/// The length of a hex-encoded digest, not counting the trailing newline.
pub const HEX_LEN: usize = 2 * DIGEST_LEN;
/// The largest input the pipeline accepts, 1 MiB. One byte more is an error.
pub const MAX_INPUT_LEN: usize = 1 << 20;

/// Errors from the digest pipeline. Every variant is fatal.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input stream held more than `limit` bytes.
    #[error("input too large (limit is {limit} bytes)")]
    InputTooLarge { limit: usize },

    /// Reading standard input failed.
    #[error("stdin: {0}")]
    Read(#[source] io::Error),

    /// Writing or flushing standard output failed.
    #[error("stdout: {0}")]
    Write(#[source] io::Error),

    /// A hex string wasn't exactly `HEX_LEN` hex characters.
    #[error("invalid digest hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A one-shot hash function with a 32-byte output.
///
/// Implementations must be deterministic and total: every input the pipeline
/// accepts (up to its limit) yields a digest, and nothing else is observable.
/// Any `Fn(&[u8]) -> Digest` closure is a `HashPrimitive`.
pub trait HashPrimitive {
    fn digest(&self, input: &[u8]) -> Digest;
}

impl<F> HashPrimitive for F
where
    F: Fn(&[u8]) -> Digest,
{
    fn digest(&self, input: &[u8]) -> Digest {
        self(input)
    }
}

/// The Eaglesong hash from CKB RFC 0010, with a 32-byte output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Eaglesong;

impl HashPrimitive for Eaglesong {
    fn digest(&self, input: &[u8]) -> Digest {
        let mut bytes = [0; DIGEST_LEN];
        ::eaglesong::eaglesong(input, &mut bytes);
        Digest { bytes }
    }
}

/// Compute the Eaglesong digest of a slice of bytes.
pub fn eaglesong(input: &[u8]) -> Digest {
    Eaglesong.digest(input)
}

/// A finalized 32-byte digest, with constant-time equality.
#[derive(Clone, Copy)]
pub struct Digest {
    bytes: [u8; DIGEST_LEN],
}

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Convert the digest to a lowercase hexadecimal
    /// [`ArrayString`](https://docs.rs/arrayvec/0.7/arrayvec/struct.ArrayString.html).
    pub fn to_hex(&self) -> ArrayString<HEX_LEN> {
        let mut s = ArrayString::new();
        hex_lower::push_all(&mut s, &self.bytes);
        s
    }

    /// Parse the output of [`to_hex`](Digest::to_hex). Upper case digits are
    /// accepted, but the length must be exactly `HEX_LEN`.
    pub fn from_hex(s: &str) -> Result<Digest, Error> {
        let mut bytes = [0; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Digest { bytes })
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Digest {
        Digest { bytes }
    }
}

/// This implementation is constant time.
impl PartialEq for Digest {
    fn eq(&self, other: &Digest) -> bool {
        constant_time_eq::constant_time_eq(&self.bytes, &other.bytes)
    }
}

/// This implementation is constant time, if the slice is `DIGEST_LEN` bytes.
impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        constant_time_eq::constant_time_eq(&self.bytes, other)
    }
}

impl Eq for Digest {}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digest(0x{})", self.to_hex())
    }
}

/// Drain `reader` (at most `limit` bytes) and hash the result once.
pub fn digest_reader<P, R>(primitive: &P, reader: R, limit: usize) -> Result<Digest, Error>
where
    P: HashPrimitive + ?Sized,
    R: Read,
{
    let input = read_input(reader, limit)?;
    Ok(primitive.digest(input.as_bytes()))
}

/// Run the whole pipeline: read, hash, then write the hex digest and a newline
/// to `writer` and flush it.
///
/// Nothing is written unless reading and hashing both succeed. The output line
/// goes out in a single `write_all`.
pub fn run<P, R, W>(primitive: &P, reader: R, mut writer: W, limit: usize) -> Result<Digest, Error>
where
    P: HashPrimitive + ?Sized,
    R: Read,
    W: Write,
{
    let digest = digest_reader(primitive, reader, limit)?;
    let mut line = ArrayString::<{ HEX_LEN + 1 }>::new();
    hex_lower::push_all(&mut line, digest.as_bytes());
    line.push('\n');
    writer.write_all(line.as_bytes()).map_err(Error::Write)?;
    writer.flush().map_err(Error::Write)?;
    Ok(digest)
}
