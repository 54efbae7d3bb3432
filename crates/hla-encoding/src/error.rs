// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the encoding layer.
//!
//! Failure kinds are kept as separate types so every signature states which
//! one it can produce:
//!
//! - [`EncoderError`] - writing a value (padding included) does not fit the buffer
//! - [`DecoderError`] - reading runs past the end, or the bytes are malformed
//! - [`IndexOutOfBounds`] - indexing an array or record outside `[0, size)`
//! - [`WindowOutOfBounds`] - a buffer window reaching past its backing bytes
//!
//! [`Error`] wraps all of them for callers that want a single type.

use thiserror::Error;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while encoding into a [`ByteWrapper`](crate::ByteWrapper).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    /// Not enough capacity left at the cursor.
    #[error("buffer overflow at offset {offset}: need {needed} bytes, {remaining} remaining")]
    BufferOverflow {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Fixed records must carry at least one field to be encoded.
    #[error("cannot encode a fixed record with no fields")]
    EmptyRecord,

    /// A count or length prefix does not fit the 32-bit wire field.
    #[error("{what} of {length} does not fit a 32-bit length prefix")]
    LengthOverflow { what: &'static str, length: usize },

    /// Source range passed to [`ByteWrapper::put_range`](crate::ByteWrapper::put_range)
    /// lies outside the source slice.
    #[error("source range {offset}+{count} outside a {len}-byte slice")]
    SourceOutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },
}

/// Failure while decoding from a [`ByteWrapper`](crate::ByteWrapper) or byte slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    /// Not enough bytes left at the cursor.
    #[error("buffer underflow at offset {offset}: need {needed} bytes, {remaining} remaining")]
    BufferUnderflow {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A complete value was decoded but input bytes are left over.
    #[error("{remaining} unconsumed bytes after decoding {consumed} of {total}")]
    TrailingBytes {
        consumed: usize,
        remaining: usize,
        total: usize,
    },

    /// Variant record discriminant with no registered alternative.
    #[error("unknown variant discriminant {0}")]
    UnknownDiscriminant(String),

    /// Boolean wire value other than 0 or 1.
    #[error("invalid boolean value {0:#010x}")]
    InvalidBoolean(u32),

    /// Unicode string with unpaired surrogates.
    #[error("invalid UTF-16 data at offset {offset}")]
    InvalidUtf16 { offset: usize },

    /// Length prefix that is negative when read as a signed 32-bit count.
    #[error("negative {what} {value} at offset {offset}")]
    NegativeLength {
        what: &'static str,
        value: i32,
        offset: usize,
    },

    /// Length prefix above the configured decode limits.
    #[error("{what} {length} exceeds decode limit {limit}")]
    LimitExceeded {
        what: &'static str,
        length: usize,
        limit: usize,
    },
}

/// Index outside the current element or field range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for size {size}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub size: usize,
}

impl IndexOutOfBounds {
    pub(crate) fn check(index: usize, size: usize) -> std::result::Result<(), Self> {
        if index < size {
            Ok(())
        } else {
            Err(Self { index, size })
        }
    }
}

/// Buffer window `[offset, offset + length)` outside the backing bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("window {offset}+{length} past end of {capacity}-byte buffer")]
pub struct WindowOutOfBounds {
    pub offset: usize,
    pub length: usize,
    pub capacity: usize,
}

/// Any failure produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("encode failed: {0}")]
    Encoder(#[from] EncoderError),

    #[error("decode failed: {0}")]
    Decoder(#[from] DecoderError),

    #[error(transparent)]
    OutOfRange(#[from] IndexOutOfBounds),

    #[error(transparent)]
    Window(#[from] WindowOutOfBounds),

    /// Decode-limit configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}
