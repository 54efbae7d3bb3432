// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HLAboolean: an HLAinteger32BE enumeration with the values 0 and 1.

use crate::buffer::ByteWrapper;
use crate::config::{HLA_FALSE, HLA_TRUE};
use crate::element::{impl_element_any, DataElement};
use crate::error::{DecoderError, EncoderError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HlaBoolean {
    value: bool,
}

impl HlaBoolean {
    pub const fn new(value: bool) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

impl From<bool> for HlaBoolean {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl DataElement for HlaBoolean {
    fn octet_boundary(&self) -> usize {
        4
    }

    fn encoded_length(&self) -> usize {
        4
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        buffer.put_u32_be(if self.value { HLA_TRUE } else { HLA_FALSE })
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        self.value = match buffer.get_u32_be()? {
            HLA_FALSE => false,
            HLA_TRUE => true,
            other => return Err(DecoderError::InvalidBoolean(other)),
        };
        Ok(())
    }

    impl_element_any!();
}
