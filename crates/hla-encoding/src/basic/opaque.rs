// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HLAopaqueData: `[length: i32 BE] [length raw bytes]`.

use crate::buffer::ByteWrapper;
use crate::config::LENGTH_PREFIX_SIZE;
use crate::element::{impl_element_any, DataElement};
use crate::error::{DecoderError, EncoderError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HlaOpaqueData {
    value: Vec<u8>,
}

impl HlaOpaqueData {
    pub fn new(value: Vec<u8>) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn set_value(&mut self, value: Vec<u8>) {
        self.value = value;
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<Vec<u8>> for HlaOpaqueData {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for HlaOpaqueData {
    fn from(value: &[u8]) -> Self {
        Self::new(value.to_vec())
    }
}

impl DataElement for HlaOpaqueData {
    fn octet_boundary(&self) -> usize {
        self.encoded_length()
    }

    fn alignment(&self) -> usize {
        1
    }

    fn encoded_length(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.value.len()
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        buffer.verify_write(self.encoded_length())?;
        buffer.put_length("opaque data length", self.value.len())?;
        buffer.put(&self.value)
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        let limit = buffer.limits().max_byte_length;
        let length = buffer.get_length("opaque data length", limit)?;
        let bytes = buffer.get_slice(length)?;
        self.value.clear();
        self.value.extend_from_slice(bytes);
        Ok(())
    }

    impl_element_any!();
}
