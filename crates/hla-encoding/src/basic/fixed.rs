// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed-width basic data representations.
//!
//! Every type here wraps one Rust number and encodes it as its raw bytes in
//! the stated byte order. The octet boundary equals the width.

use crate::buffer::ByteWrapper;
use crate::element::{impl_element_any, DataElement};
use crate::error::{DecoderError, EncoderError};

/// Generate a fixed-width element (struct, accessors, `DataElement` impl).
///
/// - `$to_bytes` / `$from_bytes` select the byte order (`to_be_bytes`, `from_le_bytes`, ...)
/// - width and octet boundary are both `size_of::<$type>()`
macro_rules! fixed_width_element {
    ($(#[$meta:meta])* $name:ident, $type:ty, $to_bytes:ident, $from_bytes:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
        pub struct $name {
            value: $type,
        }

        impl $name {
            /// Width on the wire, also the octet boundary.
            pub const WIDTH: usize = std::mem::size_of::<$type>();

            pub const fn new(value: $type) -> Self {
                Self { value }
            }

            pub const fn value(&self) -> $type {
                self.value
            }

            pub fn set_value(&mut self, value: $type) {
                self.value = value;
            }
        }

        impl From<$type> for $name {
            fn from(value: $type) -> Self {
                Self::new(value)
            }
        }

        impl DataElement for $name {
            fn octet_boundary(&self) -> usize {
                Self::WIDTH
            }

            fn encoded_length(&self) -> usize {
                Self::WIDTH
            }

            fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
                buffer.put(&self.value.$to_bytes())
            }

            fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
                let mut bytes = [0u8; std::mem::size_of::<$type>()];
                buffer.get(&mut bytes)?;
                self.value = <$type>::$from_bytes(bytes);
                Ok(())
            }

            impl_element_any!();
        }
    };
}

fixed_width_element!(
    /// HLAoctet: one uninterpreted byte.
    HlaOctet, u8, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAbyte: one signed byte.
    HlaByte, i8, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAoctetPairBE: 16-bit unsigned, big-endian.
    HlaOctetPairBE, u16, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAoctetPairLE: 16-bit unsigned, little-endian.
    HlaOctetPairLE, u16, to_le_bytes, from_le_bytes
);
fixed_width_element!(
    /// HLAinteger16BE
    HlaInteger16BE, i16, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAinteger16LE
    HlaInteger16LE, i16, to_le_bytes, from_le_bytes
);
fixed_width_element!(
    /// HLAinteger32BE: also the type of every count and length prefix.
    HlaInteger32BE, i32, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAinteger32LE
    HlaInteger32LE, i32, to_le_bytes, from_le_bytes
);
fixed_width_element!(
    /// HLAinteger64BE
    HlaInteger64BE, i64, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAinteger64LE
    HlaInteger64LE, i64, to_le_bytes, from_le_bytes
);
fixed_width_element!(
    /// HLAfloat32BE: IEEE-754 single, big-endian.
    HlaFloat32BE, f32, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAfloat32LE: IEEE-754 single, little-endian.
    HlaFloat32LE, f32, to_le_bytes, from_le_bytes
);
fixed_width_element!(
    /// HLAfloat64BE: IEEE-754 double, big-endian.
    HlaFloat64BE, f64, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAfloat64LE: IEEE-754 double, little-endian.
    HlaFloat64LE, f64, to_le_bytes, from_le_bytes
);
fixed_width_element!(
    /// HLAASCIIchar: one 8-bit character code.
    HlaAsciiChar, u8, to_be_bytes, from_be_bytes
);
fixed_width_element!(
    /// HLAunicodeChar: one UTF-16 code unit, big-endian.
    HlaUnicodeChar, u16, to_be_bytes, from_be_bytes
);

// Eq/Ord/Hash for the integral representations so they can key variant records
// or maps. Floats stay PartialEq only.
macro_rules! impl_integral_traits {
    ($($name:ident),*) => {
        $(
            impl Eq for $name {}

            impl Ord for $name {
                fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                    self.value.cmp(&other.value)
                }
            }

            impl std::hash::Hash for $name {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    self.value.hash(state);
                }
            }
        )*
    };
}

impl_integral_traits!(
    HlaOctet,
    HlaByte,
    HlaOctetPairBE,
    HlaOctetPairLE,
    HlaInteger16BE,
    HlaInteger16LE,
    HlaInteger32BE,
    HlaInteger32LE,
    HlaInteger64BE,
    HlaInteger64LE,
    HlaAsciiChar,
    HlaUnicodeChar
);

impl HlaAsciiChar {
    /// Character view of the code (Latin-1 mapping for codes above 0x7F).
    pub fn as_char(&self) -> char {
        char::from(self.value)
    }
}

impl HlaUnicodeChar {
    /// `None` for surrogate code units.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(u32::from(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(element: &dyn DataElement) -> Vec<u8> {
        element.to_byte_array().expect("sized buffer")
    }

    #[test]
    fn test_octet_and_byte() {
        assert_eq!(encode(&HlaOctet::new(0xAB)), vec![0xAB]);
        assert_eq!(encode(&HlaByte::new(-1)), vec![0xFF]);
        assert_eq!(HlaOctet::default().octet_boundary(), 1);

        let mut byte = HlaByte::default();
        byte.decode_bytes(&[0x80]).unwrap();
        assert_eq!(byte.value(), i8::MIN);
    }

    #[test]
    fn test_octet_pair_byte_order() {
        assert_eq!(encode(&HlaOctetPairBE::new(0x1234)), vec![0x12, 0x34]);
        assert_eq!(encode(&HlaOctetPairLE::new(0x1234)), vec![0x34, 0x12]);
        assert_eq!(HlaOctetPairLE::default().octet_boundary(), 2);
    }

    #[test]
    fn test_integer_vectors() {
        assert_eq!(encode(&HlaInteger16BE::new(-2)), vec![0xFF, 0xFE]);
        assert_eq!(encode(&HlaInteger16LE::new(-2)), vec![0xFE, 0xFF]);
        assert_eq!(
            encode(&HlaInteger32BE::new(1431655765)),
            vec![0x55, 0x55, 0x55, 0x55]
        );
        assert_eq!(
            encode(&HlaInteger32BE::new(-1431655766)),
            vec![0xAA, 0xAA, 0xAA, 0xAA]
        );
        assert_eq!(
            encode(&HlaInteger32LE::new(0x0102_0304)),
            vec![0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            encode(&HlaInteger64BE::new(i64::MIN)),
            vec![0x80, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            encode(&HlaInteger64LE::new(i64::MIN)),
            vec![0, 0, 0, 0, 0, 0, 0, 0x80]
        );
        assert_eq!(HlaInteger64BE::default().octet_boundary(), 8);
    }

    #[test]
    fn test_float_vectors() {
        assert_eq!(
            encode(&HlaFloat32BE::new(3.14159)),
            vec![0x40, 0x49, 0x0F, 0xD0]
        );
        assert_eq!(
            encode(&HlaFloat32LE::new(3.14159)),
            vec![0xD0, 0x0F, 0x49, 0x40]
        );
        assert_eq!(
            encode(&HlaFloat64BE::new(1.0)),
            vec![0x3F, 0xF0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            encode(&HlaFloat64LE::new(1.0)),
            vec![0, 0, 0, 0, 0, 0, 0xF0, 0x3F]
        );
    }

    #[test]
    fn test_extremes_roundtrip() {
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            let bytes = encode(&HlaInteger32LE::new(value));
            let mut decoded = HlaInteger32LE::default();
            decoded.decode_bytes(&bytes).unwrap();
            assert_eq!(decoded.value(), value);
        }
        for value in [u16::MIN, u16::MAX] {
            let bytes = encode(&HlaOctetPairBE::new(value));
            let mut decoded = HlaOctetPairBE::default();
            decoded.decode_bytes(&bytes).unwrap();
            assert_eq!(decoded.value(), value);
        }
        for value in [f64::MIN, f64::MAX, f64::EPSILON, -0.0] {
            let bytes = encode(&HlaFloat64BE::new(value));
            let mut decoded = HlaFloat64BE::default();
            decoded.decode_bytes(&bytes).unwrap();
            assert_eq!(decoded.value().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_decode_short_buffer_fails() {
        let mut value = HlaInteger64BE::default();
        assert!(matches!(
            value.decode_bytes(&[0; 7]),
            Err(DecoderError::BufferUnderflow { .. })
        ));
        assert_eq!(value.value(), 0);
    }

    #[test]
    fn test_consecutive_encodes_align() {
        let mut buffer = ByteWrapper::new(24);
        HlaOctet::new(1).encode(&mut buffer).unwrap();
        HlaInteger32BE::new(2).encode(&mut buffer).unwrap();
        HlaOctetPairBE::new(3).encode(&mut buffer).unwrap();
        HlaInteger64BE::new(4).encode(&mut buffer).unwrap();
        assert_eq!(buffer.pos(), 24);
        assert_eq!(
            buffer.array(),
            &[
                1, 0, 0, 0, 0, 0, 0, 2, // octet, pad, int32
                0, 3, 0, 0, 0, 0, 0, 0, // pair, pad
                0, 0, 0, 0, 0, 0, 0, 4, // int64
            ]
        );
    }

    #[test]
    fn test_chars() {
        assert_eq!(HlaAsciiChar::new(b'A').as_char(), 'A');
        assert_eq!(HlaAsciiChar::new(0xE9).as_char(), '\u{e9}');
        assert_eq!(encode(&HlaUnicodeChar::new(0x00E9)), vec![0x00, 0xE9]);
        assert_eq!(HlaUnicodeChar::new(0x0041).as_char(), Some('A'));
        assert_eq!(HlaUnicodeChar::new(0xD800).as_char(), None);
        assert_eq!(HlaUnicodeChar::default().octet_boundary(), 2);
    }
}
