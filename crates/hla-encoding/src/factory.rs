// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Single entry point for creating every encoding type.
//!
//! [`EncoderFactory`] is stateless; callers that hand out encoders to
//! federate code hold one and never name the concrete constructors.

use crate::aggregate::{HlaFixedArray, HlaFixedRecord, HlaVariableArray, HlaVariantRecord};
use crate::basic::{
    HlaAsciiChar, HlaAsciiString, HlaBoolean, HlaByte, HlaFloat32BE, HlaFloat32LE, HlaFloat64BE,
    HlaFloat64LE, HlaInteger16BE, HlaInteger16LE, HlaInteger32BE, HlaInteger32LE,
    HlaInteger64BE, HlaInteger64LE, HlaOctet, HlaOctetPairBE, HlaOctetPairLE, HlaOpaqueData,
    HlaUnicodeChar, HlaUnicodeString,
};
use crate::element::{DataElement, DataElementFactory};

macro_rules! create_basic {
    ($($method:ident => $type:ident($value:ty)),* $(,)?) => {
        $(
            pub fn $method(&self, value: $value) -> $type {
                $type::new(value)
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncoderFactory;

impl EncoderFactory {
    pub const fn new() -> Self {
        Self
    }

    create_basic! {
        create_hla_octet => HlaOctet(u8),
        create_hla_byte => HlaByte(i8),
        create_hla_boolean => HlaBoolean(bool),
        create_hla_ascii_char => HlaAsciiChar(u8),
        create_hla_unicode_char => HlaUnicodeChar(u16),
        create_hla_octet_pair_be => HlaOctetPairBE(u16),
        create_hla_octet_pair_le => HlaOctetPairLE(u16),
        create_hla_integer16_be => HlaInteger16BE(i16),
        create_hla_integer16_le => HlaInteger16LE(i16),
        create_hla_integer32_be => HlaInteger32BE(i32),
        create_hla_integer32_le => HlaInteger32LE(i32),
        create_hla_integer64_be => HlaInteger64BE(i64),
        create_hla_integer64_le => HlaInteger64LE(i64),
        create_hla_float32_be => HlaFloat32BE(f32),
        create_hla_float32_le => HlaFloat32LE(f32),
        create_hla_float64_be => HlaFloat64BE(f64),
        create_hla_float64_le => HlaFloat64LE(f64),
    }

    pub fn create_hla_ascii_string(&self, value: impl Into<String>) -> HlaAsciiString {
        HlaAsciiString::new(value)
    }

    pub fn create_hla_unicode_string(&self, value: impl Into<String>) -> HlaUnicodeString {
        HlaUnicodeString::new(value)
    }

    pub fn create_hla_opaque_data(&self, value: Vec<u8>) -> HlaOpaqueData {
        HlaOpaqueData::new(value)
    }

    /// Fixed array of `size` elements created by `factory`.
    pub fn create_hla_fixed_array<T: DataElement>(
        &self,
        factory: &DataElementFactory<T>,
        size: usize,
    ) -> HlaFixedArray<T> {
        HlaFixedArray::new(factory, size)
    }

    /// Fixed array holding exactly `elements`.
    pub fn create_hla_fixed_array_of<T: DataElement>(&self, elements: Vec<T>) -> HlaFixedArray<T> {
        HlaFixedArray::from_elements(elements)
    }

    /// Empty variable array; decoding or `resize` fills it from `factory`.
    pub fn create_hla_variable_array_empty<T: DataElement>(
        &self,
        factory: DataElementFactory<T>,
    ) -> HlaVariableArray<T> {
        HlaVariableArray::new(factory)
    }

    /// Variable array of `size` elements created by `factory`.
    pub fn create_hla_variable_array_sized<T: DataElement>(
        &self,
        factory: DataElementFactory<T>,
        size: usize,
    ) -> HlaVariableArray<T> {
        HlaVariableArray::with_size(factory, size)
    }

    /// Variable array starting with `elements`; `factory` fills slots added later.
    pub fn create_hla_variable_array<T: DataElement>(
        &self,
        factory: DataElementFactory<T>,
        elements: Vec<T>,
    ) -> HlaVariableArray<T> {
        HlaVariableArray::from_elements(factory, elements)
    }

    pub fn create_hla_fixed_record(&self) -> HlaFixedRecord {
        HlaFixedRecord::new()
    }

    pub fn create_hla_variant_record<D>(&self, discriminant: D) -> HlaVariantRecord<D>
    where
        D: DataElement + Clone + PartialEq,
    {
        HlaVariantRecord::new(discriminant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{element_factory, factory_fn};

    #[test]
    fn test_basic_creators() {
        let factory = EncoderFactory::new();
        assert_eq!(factory.create_hla_octet(3).value(), 3);
        assert!(factory.create_hla_boolean(true).value());
        assert_eq!(factory.create_hla_integer64_le(-9).value(), -9);
        assert_eq!(factory.create_hla_ascii_string("abc").value(), "abc");
        assert_eq!(factory.create_hla_opaque_data(vec![1, 2]).len(), 2);
        assert_eq!(
            factory.create_hla_float32_be(1.0).to_byte_array().unwrap(),
            vec![0x3F, 0x80, 0, 0]
        );
    }

    #[test]
    fn test_aggregate_creators() {
        let factory = EncoderFactory::new();
        let fixed = factory.create_hla_fixed_array(&element_factory::<HlaOctet>(), 4);
        assert_eq!(fixed.size(), 4);

        let variable = factory.create_hla_variable_array(
            element_factory(),
            vec![factory.create_hla_integer16_be(1)],
        );
        assert_eq!(variable.to_byte_array().unwrap(), vec![0, 0, 0, 1, 0, 1]);

        let empty = factory.create_hla_variable_array_empty(element_factory::<HlaOctet>());
        assert!(empty.is_empty());
        assert_eq!(empty.to_byte_array().unwrap(), vec![0, 0, 0, 0]);

        let sized = factory.create_hla_variable_array_sized(
            factory_fn(|i| HlaInteger16BE::new(i as i16 + 1)),
            2,
        );
        assert_eq!(sized.size(), 2);
        assert_eq!(sized.to_byte_array().unwrap(), vec![0, 0, 0, 2, 0, 1, 0, 2]);

        let mut record = factory.create_hla_fixed_record();
        record.add(factory.create_hla_octet(1));
        assert_eq!(record.size(), 1);

        let variant = factory.create_hla_variant_record(factory.create_hla_octet(0));
        assert!(variant.get_value().is_none());
    }
}
