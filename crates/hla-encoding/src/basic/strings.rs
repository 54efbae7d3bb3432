// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Length-prefixed character strings.
//!
//! # Wire format
//!
//! ```text
//! HLAASCIIstring:   [count: i32 BE] [count bytes, one per char]
//! HLAunicodeString: [count: i32 BE] [FE FF] [count - 1 UTF-16 units, BE]
//! ```
//!
//! The Unicode count includes the byte-order mark.

use crate::buffer::ByteWrapper;
use crate::config::{BYTE_ORDER_MARK, LENGTH_PREFIX_SIZE, SWAPPED_BYTE_ORDER_MARK};
use crate::element::{impl_element_any, DataElement};
use crate::error::{DecoderError, EncoderError};

/// Byte written for chars outside the 8-bit range.
const ASCII_REPLACEMENT: u8 = b'?';

/// HLAASCIIstring: 8-bit characters behind a 32-bit count.
///
/// Chars up to U+00FF encode as their code point; wider chars become `?`.
/// Decoding maps every byte to the char with the same code point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HlaAsciiString {
    value: String,
}

impl HlaAsciiString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn into_value(self) -> String {
        self.value
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }
}

impl From<&str> for HlaAsciiString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HlaAsciiString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl DataElement for HlaAsciiString {
    fn octet_boundary(&self) -> usize {
        self.encoded_length()
    }

    fn alignment(&self) -> usize {
        1
    }

    fn encoded_length(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.char_count()
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        buffer.verify_write(self.encoded_length())?;
        buffer.put_length("ASCII string length", self.char_count())?;
        for c in self.value.chars() {
            buffer.put_u8(u8::try_from(c).unwrap_or(ASCII_REPLACEMENT))?;
        }
        Ok(())
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        let limit = buffer.limits().max_byte_length;
        let count = buffer.get_length("ASCII string length", limit)?;
        let bytes = buffer.get_slice(count)?;
        self.value = bytes.iter().map(|&b| char::from(b)).collect();
        Ok(())
    }

    impl_element_any!();
}

/// HLAunicodeString: UTF-16 code units behind a 32-bit count and a BOM.
///
/// Encoding always writes a big-endian BOM. Decoding accepts `FE FF`,
/// the swapped `FF FE` (little-endian units follow) and BOM-less big-endian
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HlaUnicodeString {
    value: String,
}

impl HlaUnicodeString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Code units on the wire, BOM included.
    fn unit_count(&self) -> usize {
        self.value.encode_utf16().count() + 1
    }
}

impl From<&str> for HlaUnicodeString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HlaUnicodeString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl DataElement for HlaUnicodeString {
    fn octet_boundary(&self) -> usize {
        4
    }

    fn encoded_length(&self) -> usize {
        LENGTH_PREFIX_SIZE + 2 * self.unit_count()
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        buffer.verify_write(self.encoded_length())?;
        buffer.put_length("Unicode string length", self.unit_count())?;
        buffer.put_u16_be(BYTE_ORDER_MARK)?;
        for unit in self.value.encode_utf16() {
            buffer.put_u16_be(unit)?;
        }
        Ok(())
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        let limit = buffer.limits().max_byte_length / 2;
        let count = buffer.get_length("Unicode string length", limit)?;
        if count == 0 {
            self.value.clear();
            return Ok(());
        }

        let offset = buffer.pos();
        let bytes = buffer.get_slice(count * 2)?;
        let (little_endian, data) = match u16::from_be_bytes([bytes[0], bytes[1]]) {
            BYTE_ORDER_MARK => (false, &bytes[2..]),
            SWAPPED_BYTE_ORDER_MARK => (true, &bytes[2..]),
            _ => (false, bytes),
        };
        let units: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| {
                if little_endian {
                    u16::from_le_bytes([pair[0], pair[1]])
                } else {
                    u16::from_be_bytes([pair[0], pair[1]])
                }
            })
            .collect();

        self.value = String::from_utf16(&units).map_err(|_| DecoderError::InvalidUtf16 { offset })?;
        Ok(())
    }

    impl_element_any!();
}
