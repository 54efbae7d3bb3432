// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The `DataElement` contract shared by every wire type.
//!
//! # Layout rules
//!
//! - [`DataElement::encode`] / [`DataElement::decode`] align the cursor to
//!   [`DataElement::alignment`] (measured from the buffer window start), then
//!   write/read the body.
//! - [`DataElement::alignment`] equals [`DataElement::octet_boundary`] except
//!   where the boundary follows the value's own length (ASCII strings, opaque
//!   data, variable arrays). Those start exactly where the previous value
//!   ends.
//! - [`DataElement::write_to`] / [`DataElement::read_from`] handle the body
//!   only. Composites use them for their members, so a composite encoding is
//!   the exact concatenation of its member encodings.
//! - [`DataElement::to_byte_array`] / [`DataElement::decode_bytes`] work on one
//!   complete encoding; `decode_bytes` rejects leftover input.

use crate::buffer::ByteWrapper;
use crate::config::DecodeLimits;
use crate::error::{DecoderError, EncoderError};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value with an IEEE 1516.2 wire representation.
pub trait DataElement: fmt::Debug + Send + 'static {
    /// Alignment unit, in bytes, this value requires before it is written.
    fn octet_boundary(&self) -> usize;

    /// Bytes occupied on the wire, padding excluded.
    fn encoded_length(&self) -> usize;

    /// Padding unit applied by [`encode`](DataElement::encode) and
    /// [`decode`](DataElement::decode).
    ///
    /// Independent of the current value: a blank receiver reports the same
    /// alignment as the sender.
    fn alignment(&self) -> usize {
        self.octet_boundary()
    }

    /// Write the body at the cursor, without leading padding.
    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError>;

    /// Read the body at the cursor into `self`, without skipping padding.
    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError>;

    /// Deep copy behind a fresh box.
    fn clone_element(&self) -> Box<dyn DataElement>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Pad to [`alignment`](DataElement::alignment), then write the body.
    ///
    /// Capacity for padding and body is checked first; on overflow the
    /// cursor does not move.
    fn encode(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        let alignment = self.alignment();
        buffer.verify_write(buffer.padding_to(alignment) + self.encoded_length())?;
        buffer.align_for_write(alignment)?;
        self.write_to(buffer)
    }

    /// Skip padding to [`alignment`](DataElement::alignment), then read the body.
    fn decode(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        buffer.align_for_read(self.alignment())?;
        self.read_from(buffer)
    }

    /// Encode into a buffer sized to exactly one encoding.
    fn to_byte_array(&self) -> Result<Vec<u8>, EncoderError> {
        let mut buffer = ByteWrapper::new(self.encoded_length());
        log::trace!(
            "[hla-encoding] to_byte_array: {} bytes for {:?}",
            buffer.capacity(),
            self
        );
        self.encode(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Decode one complete encoding; every input byte must be consumed.
    fn decode_bytes(&mut self, bytes: &[u8]) -> Result<(), DecoderError> {
        self.decode_bytes_with_limits(bytes, DecodeLimits::default())
    }

    /// [`decode_bytes`](DataElement::decode_bytes) with explicit length limits.
    fn decode_bytes_with_limits(
        &mut self,
        bytes: &[u8],
        limits: DecodeLimits,
    ) -> Result<(), DecoderError> {
        let mut buffer = ByteWrapper::from(bytes).with_limits(limits);
        log::trace!("[hla-encoding] decode_bytes: {} bytes", bytes.len());
        self.decode(&mut buffer)?;
        if buffer.remaining() > 0 {
            return Err(DecoderError::TrailingBytes {
                consumed: buffer.pos() - buffer.offset(),
                remaining: buffer.remaining(),
                total: bytes.len(),
            });
        }
        Ok(())
    }
}

impl Clone for Box<dyn DataElement> {
    fn clone(&self) -> Self {
        self.clone_element()
    }
}

impl dyn DataElement {
    /// Typed view of a type-erased element.
    pub fn downcast_ref<T: DataElement>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: DataElement>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    pub fn is<T: DataElement>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Creates array elements on demand; receives the index of the slot being filled.
pub type DataElementFactory<T> = Arc<dyn Fn(usize) -> T + Send + Sync>;

/// Factory producing `T::default()` for every slot.
pub fn element_factory<T: DataElement + Default>() -> DataElementFactory<T> {
    Arc::new(|_| T::default())
}

/// Factory from any closure.
pub fn factory_fn<T, F>(f: F) -> DataElementFactory<T>
where
    T: DataElement,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Implements the `Any` plumbing of [`DataElement`] for a concrete type.
macro_rules! impl_element_any {
    () => {
        fn clone_element(&self) -> Box<dyn $crate::element::DataElement> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

pub(crate) use impl_element_any;
