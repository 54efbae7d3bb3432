// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounded byte buffer with a single read/write cursor.
//!
//! Every codec writes into, or reads from, a [`ByteWrapper`]. A wrapper is a
//! window `[offset, limit)` over backing bytes that are either owned or
//! borrowed. Any access past the window fails with
//! [`EncoderError::BufferOverflow`] (writes) or
//! [`DecoderError::BufferUnderflow`] (reads) without touching the cursor.
//!
//! # Positions
//!
//! [`ByteWrapper::pos`] is an index into the backing bytes, so it equals the
//! number of bytes consumed only when the window starts at 0. Alignment
//! padding is measured from the window start.
//!
//! Borrowed bytes are copied on the first write; reading never copies.

use crate::config::DecodeLimits;
use crate::error::{DecoderError, EncoderError, WindowOutOfBounds};
use std::borrow::Cow;

/// Generate cursor write methods for fixed-width numbers.
///
/// Each generated method:
/// 1. Checks capacity (returns `EncoderError::BufferOverflow` on overflow)
/// 2. Converts the value with the given `to_*_bytes` method
/// 3. Copies the bytes at the cursor and advances it
macro_rules! impl_write {
    ($name:ident, $type:ty, $to_bytes:ident) => {
        pub fn $name(&mut self, value: $type) -> Result<(), EncoderError> {
            self.put(&value.$to_bytes())
        }
    };
}

/// Generate cursor read methods for fixed-width numbers.
///
/// Each generated method:
/// 1. Checks remaining bytes (returns `DecoderError::BufferUnderflow`)
/// 2. Reads `size_of::<$type>()` bytes at the cursor
/// 3. Converts them with the given `from_*_bytes` function and advances
macro_rules! impl_read {
    ($name:ident, $type:ty, $from_bytes:ident) => {
        pub fn $name(&mut self) -> Result<$type, DecoderError> {
            let mut bytes = [0u8; std::mem::size_of::<$type>()];
            self.get(&mut bytes)?;
            Ok(<$type>::$from_bytes(bytes))
        }
    };
}

/// Bounded window over owned or borrowed bytes, with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteWrapper<'a> {
    buffer: Cow<'a, [u8]>,
    offset: usize,
    pos: usize,
    limit: usize,
    limits: DecodeLimits,
}

impl<'a> ByteWrapper<'a> {
    /// Zero-filled buffer of `capacity` bytes, cursor at 0.
    pub fn new(capacity: usize) -> Self {
        Self::from_vec(vec![0u8; capacity])
    }

    /// Wrap existing bytes; capacity is their length.
    pub fn from_vec(buffer: Vec<u8>) -> Self {
        Self::whole(Cow::Owned(buffer))
    }

    /// Read view over `bytes` without copying them.
    pub fn borrowed(bytes: &'a [u8]) -> Self {
        Self::whole(Cow::Borrowed(bytes))
    }

    /// Window of `length` bytes starting at `offset`; the cursor starts at `offset`.
    pub fn with_window(
        buffer: impl Into<Cow<'a, [u8]>>,
        offset: usize,
        length: usize,
    ) -> Result<Self, WindowOutOfBounds> {
        let mut wrapper = Self::default();
        wrapper.reassign(buffer, offset, length)?;
        Ok(wrapper)
    }

    /// Window from `offset` to the end of `buffer`.
    pub fn from_offset(
        buffer: impl Into<Cow<'a, [u8]>>,
        offset: usize,
    ) -> Result<Self, WindowOutOfBounds> {
        let buffer = buffer.into();
        let length = buffer.len().checked_sub(offset).ok_or(WindowOutOfBounds {
            offset,
            length: 0,
            capacity: buffer.len(),
        })?;
        Self::with_window(buffer, offset, length)
    }

    fn whole(buffer: Cow<'a, [u8]>) -> Self {
        let limit = buffer.len();
        Self {
            buffer,
            offset: 0,
            pos: 0,
            limit,
            limits: DecodeLimits::default(),
        }
    }

    /// Point this wrapper at a new window and rewind the cursor.
    ///
    /// Decode limits are kept. On error the wrapper is left unchanged.
    pub fn reassign(
        &mut self,
        buffer: impl Into<Cow<'a, [u8]>>,
        offset: usize,
        length: usize,
    ) -> Result<(), WindowOutOfBounds> {
        let buffer = buffer.into();
        let limit = offset
            .checked_add(length)
            .filter(|limit| *limit <= buffer.len())
            .ok_or(WindowOutOfBounds {
                offset,
                length,
                capacity: buffer.len(),
            })?;
        self.buffer = buffer;
        self.offset = offset;
        self.pos = offset;
        self.limit = limit;
        Ok(())
    }

    /// Replace the decode limits applied to length prefixes read from this buffer.
    #[must_use]
    pub fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Window length in bytes.
    pub fn capacity(&self) -> usize {
        self.limit - self.offset
    }

    /// Index of the window start in the backing bytes.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Index one past the window end in the backing bytes.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Current cursor position in the backing bytes.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.pos)
    }

    /// Full backing storage, regardless of the window and cursor.
    pub fn array(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer.into_owned()
    }

    /// Rewind the cursor to the start of the window.
    pub fn reset(&mut self) {
        self.pos = self.offset;
    }

    /// View from the cursor to the window end, starting a new window.
    ///
    /// The view borrows this wrapper's bytes; writes through it land in a
    /// private copy.
    pub fn slice(&self) -> ByteWrapper<'_> {
        self.view(self.remaining())
    }

    /// View of the next `length` bytes; fails if fewer remain.
    pub fn slice_len(&self, length: usize) -> Result<ByteWrapper<'_>, DecoderError> {
        self.verify_read(length)?;
        Ok(self.view(length))
    }

    fn view(&self, length: usize) -> ByteWrapper<'_> {
        ByteWrapper {
            buffer: Cow::Borrowed(&self.buffer[..]),
            offset: self.pos,
            pos: self.pos,
            limit: self.pos + length,
            limits: self.limits,
        }
    }

    /// Check that `len` more bytes can be written at the cursor.
    pub fn verify_write(&self, len: usize) -> Result<(), EncoderError> {
        if len > self.remaining() {
            return Err(EncoderError::BufferOverflow {
                offset: self.pos,
                needed: len,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Check that `len` more bytes can be read at the cursor.
    pub fn verify_read(&self, len: usize) -> Result<(), DecoderError> {
        if len > self.remaining() {
            return Err(DecoderError::BufferUnderflow {
                offset: self.pos,
                needed: len,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Skip `len` bytes without reading them.
    pub fn advance(&mut self, len: usize) -> Result<(), DecoderError> {
        self.verify_read(len)?;
        self.pos += len;
        Ok(())
    }

    /// Padding needed at the cursor to reach a multiple of `boundary`,
    /// counted from the window start.
    pub fn padding_to(&self, boundary: usize) -> usize {
        padding_for(self.pos - self.offset, boundary)
    }

    /// Write zero padding up to the next multiple of `boundary`.
    pub fn align_for_write(&mut self, boundary: usize) -> Result<(), EncoderError> {
        let padding = self.padding_to(boundary);
        if padding == 0 {
            return Ok(());
        }
        self.verify_write(padding)?;
        self.buffer.to_mut()[self.pos..self.pos + padding].fill(0);
        self.pos += padding;
        Ok(())
    }

    /// Skip padding up to the next multiple of `boundary`.
    pub fn align_for_read(&mut self, boundary: usize) -> Result<(), DecoderError> {
        self.advance(self.padding_to(boundary))
    }

    /// Copy `src` at the cursor.
    pub fn put(&mut self, src: &[u8]) -> Result<(), EncoderError> {
        self.verify_write(src.len())?;
        self.buffer.to_mut()[self.pos..self.pos + src.len()].copy_from_slice(src);
        self.pos += src.len();
        Ok(())
    }

    /// Copy `count` bytes of `src` starting at `offset`.
    pub fn put_range(
        &mut self,
        src: &[u8],
        offset: usize,
        count: usize,
    ) -> Result<(), EncoderError> {
        let chunk = offset
            .checked_add(count)
            .and_then(|end| src.get(offset..end))
            .ok_or(EncoderError::SourceOutOfRange {
                offset,
                count,
                len: src.len(),
            })?;
        self.put(chunk)
    }

    /// Fill `dest` from the cursor.
    pub fn get(&mut self, dest: &mut [u8]) -> Result<(), DecoderError> {
        dest.copy_from_slice(self.get_slice(dest.len())?);
        Ok(())
    }

    /// Borrow the next `len` bytes and move the cursor past them.
    pub fn get_slice(&mut self, len: usize) -> Result<&[u8], DecoderError> {
        self.verify_read(len)?;
        let start = self.pos;
        self.pos += len;
        Ok(&self.buffer[start..start + len])
    }

    impl_write!(put_u8, u8, to_be_bytes);
    impl_write!(put_u16_be, u16, to_be_bytes);
    impl_write!(put_u16_le, u16, to_le_bytes);
    impl_write!(put_u32_be, u32, to_be_bytes);
    impl_write!(put_u32_le, u32, to_le_bytes);
    impl_write!(put_u64_be, u64, to_be_bytes);
    impl_write!(put_u64_le, u64, to_le_bytes);

    impl_read!(get_u8, u8, from_be_bytes);
    impl_read!(get_u16_be, u16, from_be_bytes);
    impl_read!(get_u16_le, u16, from_le_bytes);
    impl_read!(get_u32_be, u32, from_be_bytes);
    impl_read!(get_u32_le, u32, from_le_bytes);
    impl_read!(get_u64_be, u64, from_be_bytes);
    impl_read!(get_u64_le, u64, from_le_bytes);

    /// Write a big-endian 32-bit integer at the cursor.
    pub fn put_int(&mut self, value: i32) -> Result<(), EncoderError> {
        self.put(&value.to_be_bytes())
    }

    /// Read a big-endian 32-bit integer at the cursor.
    pub fn get_int(&mut self) -> Result<i32, DecoderError> {
        let mut bytes = [0u8; 4];
        self.get(&mut bytes)?;
        Ok(i32::from_be_bytes(bytes))
    }

    /// Write a big-endian 32-bit integer at backing index `offset`; the cursor
    /// does not move. The four bytes must lie inside the window.
    pub fn put_int_at(&mut self, offset: usize, value: i32) -> Result<(), EncoderError> {
        let Some(end) = self.window_end(offset, 4) else {
            return Err(EncoderError::BufferOverflow {
                offset,
                needed: 4,
                remaining: self.limit.saturating_sub(offset),
            });
        };
        self.buffer.to_mut()[offset..end].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Read a big-endian 32-bit integer at backing index `offset`; the cursor
    /// does not move.
    pub fn get_int_at(&self, offset: usize) -> Result<i32, DecoderError> {
        let Some(end) = self.window_end(offset, 4) else {
            return Err(DecoderError::BufferUnderflow {
                offset,
                needed: 4,
                remaining: self.limit.saturating_sub(offset),
            });
        };
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.buffer[offset..end]);
        Ok(i32::from_be_bytes(bytes))
    }

    fn window_end(&self, offset: usize, len: usize) -> Option<usize> {
        if offset < self.offset {
            return None;
        }
        offset.checked_add(len).filter(|end| *end <= self.limit)
    }

    /// Write a 32-bit big-endian count/length prefix.
    pub(crate) fn put_length(&mut self, what: &'static str, length: usize) -> Result<(), EncoderError> {
        let value = i32::try_from(length).map_err(|_| EncoderError::LengthOverflow { what, length })?;
        self.put_int(value)
    }

    /// Read a 32-bit big-endian count/length prefix and check it against `limit`.
    pub(crate) fn get_length(&mut self, what: &'static str, limit: usize) -> Result<usize, DecoderError> {
        let offset = self.pos;
        let value = self.get_int()?;
        let length = usize::try_from(value).map_err(|_| DecoderError::NegativeLength {
            what,
            value,
            offset,
        })?;
        if length > limit {
            return Err(DecoderError::LimitExceeded {
                what,
                length,
                limit,
            });
        }
        Ok(length)
    }
}

impl From<Vec<u8>> for ByteWrapper<'_> {
    fn from(buffer: Vec<u8>) -> Self {
        Self::from_vec(buffer)
    }
}

impl<'a> From<&'a [u8]> for ByteWrapper<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::borrowed(bytes)
    }
}

/// Padding bytes needed to move `offset` to the next multiple of `boundary`.
///
/// Boundaries need not be powers of two.
pub const fn padding_for(offset: usize, boundary: usize) -> usize {
    if boundary <= 1 {
        return 0;
    }
    match offset % boundary {
        0 => 0,
        rem => boundary - rem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_U16: u16 = 0xCDEF;
    const TEST_U32: u32 = 0x1234_5678;
    const TEST_U64: u64 = 0x1122_3344_5566_7788;

    #[test]
    fn test_default_has_zero_capacity() {
        let mut wrapper = ByteWrapper::default();
        assert_eq!(wrapper.capacity(), 0);
        assert_eq!(wrapper.pos(), 0);
        assert!(wrapper.put_u8(1).is_err());
        assert!(wrapper.get_u8().is_err());
    }

    #[test]
    fn test_write_overflow_reports_offset() {
        let mut wrapper = ByteWrapper::new(2);
        wrapper.put_u16_be(0xABCD).expect("u16 fits");

        let err = wrapper.put_u8(0xFF).unwrap_err();
        assert_eq!(
            err,
            EncoderError::BufferOverflow {
                offset: 2,
                needed: 1,
                remaining: 0
            }
        );
        assert_eq!(wrapper.pos(), 2);
    }

    #[test]
    fn test_read_underflow_reports_offset() {
        let mut wrapper = ByteWrapper::from_vec(vec![0u8; 3]);
        wrapper.get_u16_be().expect("u16 available");

        let err = wrapper.get_u32_be().unwrap_err();
        assert_eq!(
            err,
            DecoderError::BufferUnderflow {
                offset: 2,
                needed: 4,
                remaining: 1
            }
        );
        assert_eq!(wrapper.pos(), 2);
    }

    #[test]
    fn test_byte_order_of_generated_methods() {
        let mut wrapper = ByteWrapper::new(28);
        wrapper.put_u16_be(TEST_U16).unwrap();
        wrapper.put_u16_le(TEST_U16).unwrap();
        wrapper.put_u32_be(TEST_U32).unwrap();
        wrapper.put_u32_le(TEST_U32).unwrap();
        wrapper.put_u64_be(TEST_U64).unwrap();
        wrapper.put_u64_le(TEST_U64).unwrap();

        let bytes = wrapper.array();
        assert_eq!(&bytes[0..2], &[0xCD, 0xEF]);
        assert_eq!(&bytes[2..4], &[0xEF, 0xCD]);
        assert_eq!(&bytes[4..8], &[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(&bytes[8..12], &[0x78, 0x56, 0x34, 0x12]);
        assert_eq!(bytes[12], 0x11);
        assert_eq!(bytes[27], 0x11);

        wrapper.reset();
        assert_eq!(wrapper.get_u16_be().unwrap(), TEST_U16);
        assert_eq!(wrapper.get_u16_le().unwrap(), TEST_U16);
        assert_eq!(wrapper.get_u32_be().unwrap(), TEST_U32);
        assert_eq!(wrapper.get_u32_le().unwrap(), TEST_U32);
        assert_eq!(wrapper.get_u64_be().unwrap(), TEST_U64);
        assert_eq!(wrapper.get_u64_le().unwrap(), TEST_U64);
        assert_eq!(wrapper.remaining(), 0);
    }

    #[test]
    fn test_align_for_write_zero_fills() {
        let mut wrapper = ByteWrapper::from_vec(vec![0xFF; 8]);
        wrapper.put_u8(0x11).unwrap();
        wrapper.align_for_write(4).unwrap();
        assert_eq!(wrapper.pos(), 4);
        assert_eq!(&wrapper.array()[..4], &[0x11, 0, 0, 0]);

        // Already aligned: no-op
        wrapper.align_for_write(4).unwrap();
        assert_eq!(wrapper.pos(), 4);
    }

    #[test]
    fn test_align_overflow() {
        let mut wrapper = ByteWrapper::new(2);
        wrapper.put_u8(1).unwrap();
        assert!(wrapper.align_for_write(8).is_err());
        assert_eq!(wrapper.pos(), 1);

        let mut reader = ByteWrapper::new(2);
        reader.get_u8().unwrap();
        assert!(reader.align_for_read(8).is_err());
    }

    #[test]
    fn test_align_non_power_of_two() {
        let mut wrapper = ByteWrapper::new(32);
        wrapper.advance(15).unwrap();
        wrapper.align_for_read(17).unwrap();
        assert_eq!(wrapper.pos(), 17);
    }

    #[test]
    fn test_absolute_int_access_keeps_cursor() {
        let mut wrapper = ByteWrapper::new(8);
        wrapper.put_int_at(4, -2).unwrap();
        assert_eq!(wrapper.pos(), 0);
        assert_eq!(&wrapper.array()[4..], &[0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(wrapper.get_int_at(4).unwrap(), -2);
        assert!(wrapper.put_int_at(5, 1).is_err());
        assert!(wrapper.get_int_at(usize::MAX).is_err());
    }

    #[test]
    fn test_length_prefix_limits() {
        let mut wrapper = ByteWrapper::new(8);
        wrapper.put_length("count", 5).unwrap();
        wrapper.put_int(-1).unwrap();
        wrapper.reset();

        let err = wrapper.get_length("count", 4).unwrap_err();
        assert_eq!(
            err,
            DecoderError::LimitExceeded {
                what: "count",
                length: 5,
                limit: 4
            }
        );

        let err = wrapper.get_length("count", usize::MAX).unwrap_err();
        assert!(matches!(err, DecoderError::NegativeLength { value: -1, offset: 4, .. }));
    }

    #[test]
    fn test_padding_for() {
        assert_eq!(padding_for(0, 4), 0);
        assert_eq!(padding_for(1, 4), 3);
        assert_eq!(padding_for(8, 8), 0);
        assert_eq!(padding_for(9, 1), 0);
        assert_eq!(padding_for(5, 0), 0);
        assert_eq!(padding_for(15, 17), 2);
    }

    #[test]
    fn test_window_bounds_and_alignment() {
        let backing = vec![0xEEu8; 12];
        let mut wrapper = ByteWrapper::with_window(backing, 3, 8).unwrap();
        assert_eq!(wrapper.pos(), 3);
        assert_eq!(wrapper.capacity(), 8);
        assert_eq!(wrapper.remaining(), 8);

        // alignment counts from the window start, not from index 0
        wrapper.put_u8(0x01).unwrap();
        wrapper.align_for_write(4).unwrap();
        assert_eq!(wrapper.pos(), 7);
        wrapper.put_u32_be(TEST_U32).unwrap();
        assert_eq!(wrapper.remaining(), 0);
        assert!(wrapper.put_u8(0).is_err());

        let bytes = wrapper.array();
        assert_eq!(&bytes[..3], &[0xEE; 3]);
        assert_eq!(&bytes[3..7], &[0x01, 0, 0, 0]);
        assert_eq!(&bytes[7..11], &[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(bytes[11], 0xEE);

        wrapper.reset();
        assert_eq!(wrapper.pos(), 3);
        assert!(wrapper.get_int_at(1).is_err());
        assert_eq!(wrapper.get_int_at(7).unwrap(), TEST_U32 as i32);
    }

    #[test]
    fn test_window_outside_backing_is_rejected() {
        let err = ByteWrapper::with_window(vec![0u8; 8], 6, 4).unwrap_err();
        assert_eq!(
            err,
            WindowOutOfBounds {
                offset: 6,
                length: 4,
                capacity: 8
            }
        );
        assert!(ByteWrapper::from_offset(vec![0u8; 4], 5).is_err());
        assert!(ByteWrapper::with_window(vec![0u8; 4], usize::MAX, 2).is_err());

        let tail = ByteWrapper::from_offset(vec![1u8, 2, 3, 4], 1).unwrap();
        assert_eq!(tail.capacity(), 3);
        assert_eq!(tail.offset(), 1);
        assert_eq!(tail.limit(), 4);
    }

    #[test]
    fn test_reassign_rewinds_and_keeps_limits() {
        let data = [9u8, 8, 7, 6, 5];
        let limits = DecodeLimits::default().with_max_byte_length(3);
        let mut wrapper = ByteWrapper::new(4).with_limits(limits);
        wrapper.put_u16_be(TEST_U16).unwrap();

        wrapper.reassign(&data[..], 2, 3).unwrap();
        assert_eq!(wrapper.pos(), 2);
        assert_eq!(wrapper.limits(), limits);
        assert_eq!(wrapper.get_u8().unwrap(), 7);

        assert!(wrapper.reassign(&data[..], 4, 2).is_err());
        assert_eq!(wrapper.pos(), 3);
        assert_eq!(wrapper.remaining(), 2);
    }

    #[test]
    fn test_slices_start_new_windows() {
        let mut wrapper = ByteWrapper::from_vec(vec![1, 2, 3, 4, 5, 6]);
        wrapper.advance(1).unwrap();

        let mut rest = wrapper.slice();
        assert_eq!(rest.offset(), 1);
        assert_eq!(rest.capacity(), 5);
        rest.get_u8().unwrap();
        rest.align_for_read(2).unwrap();
        assert_eq!(rest.pos(), 3);

        let mut pair = wrapper.slice_len(2).unwrap();
        assert_eq!(pair.get_u16_be().unwrap(), 0x0203);
        assert!(pair.get_u8().is_err());

        assert!(matches!(
            wrapper.slice_len(6),
            Err(DecoderError::BufferUnderflow {
                offset: 1,
                needed: 6,
                remaining: 5
            })
        ));
        assert_eq!(wrapper.pos(), 1);
    }

    #[test]
    fn test_borrowed_bytes_copy_on_first_write() {
        let data = [0xAAu8; 4];
        let mut wrapper = ByteWrapper::from(&data[..]);
        assert_eq!(wrapper.get_u8().unwrap(), 0xAA);
        wrapper.put_u8(0x01).unwrap();
        assert_eq!(wrapper.array(), &[0xAA, 0x01, 0xAA, 0xAA]);
        assert_eq!(data, [0xAA; 4]);
    }

    #[test]
    fn test_put_range_and_single_bytes() {
        let mut wrapper = ByteWrapper::new(4);
        wrapper.put_range(&[9, 8, 7, 6], 1, 2).unwrap();
        wrapper.put_u8(0x42).unwrap();
        assert_eq!(wrapper.array(), &[8, 7, 0x42, 0]);

        assert_eq!(
            wrapper.put_range(&[1, 2], 1, 2).unwrap_err(),
            EncoderError::SourceOutOfRange {
                offset: 1,
                count: 2,
                len: 2
            }
        );
        assert_eq!(wrapper.pos(), 3);

        wrapper.reset();
        assert_eq!(wrapper.get_u8().unwrap(), 8);
    }
}
