// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hla-encoding - IEEE 1516.2 data encoding
//!
//! Encoders and decoders for the HLA data representations exchanged between
//! federates: attribute values and interaction parameters travel as byte
//! buffers, and this crate turns typed values into those buffers and back.
//!
//! ## Quick Start
//!
//! ```rust
//! use hla_encoding::{DataElement, HlaAsciiString, HlaFixedRecord, HlaFloat32BE, HlaBoolean};
//!
//! let record = HlaFixedRecord::new()
//!     .with_field(HlaFloat32BE::new(3.14))
//!     .with_field(HlaAsciiString::new("Hello World"))
//!     .with_field(HlaBoolean::new(true));
//!
//! let bytes = record.to_byte_array().unwrap();
//! assert_eq!(bytes.len(), 23);
//!
//! let mut decoded = HlaFixedRecord::new()
//!     .with_field(HlaFloat32BE::default())
//!     .with_field(HlaAsciiString::default())
//!     .with_field(HlaBoolean::default());
//! decoded.decode_bytes(&bytes).unwrap();
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +----------------------------------------------------------------+
//! |  Constructed types                                             |
//! |  HlaFixedArray | HlaVariableArray | HlaFixedRecord | Variant   |
//! +----------------------------------------------------------------+
//! |  Basic / simple types                                          |
//! |  integers, floats (BE/LE) | boolean | chars | strings | opaque |
//! +----------------------------------------------------------------+
//! |  DataElement contract  (boundary, length, encode, decode)      |
//! +----------------------------------------------------------------+
//! |  ByteWrapper  (buffer window, cursor, decode limits)           |
//! +----------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DataElement`] | Contract every wire type implements |
//! | [`ByteWrapper`] | Bounded window over owned or borrowed bytes, with a cursor |
//! | [`EncoderFactory`] | Creates every encoding type |
//! | [`DecodeLimits`] | Caps on decoded counts and lengths |
//!
//! ## See Also
//!
//! - IEEE 1516.2-2010, clause 4.13 (Data representation)

/// Constructed types: fixed and variable arrays, fixed and variant records.
pub mod aggregate;
/// Basic and simple data representations.
pub mod basic;
/// Bounded byte buffer with a read/write cursor.
pub mod buffer;
/// Wire constants and decode limits.
pub mod config;
/// The `DataElement` contract and element factories.
pub mod element;
/// Error types.
pub mod error;
/// `EncoderFactory`, one creator per encoding type.
pub mod factory;
/// Decode-limit profile loaders (YAML).
pub mod loaders;

pub use aggregate::{HlaFixedArray, HlaFixedRecord, HlaVariableArray, HlaVariantRecord};
pub use basic::{
    HlaAsciiChar, HlaAsciiString, HlaBoolean, HlaByte, HlaFloat32BE, HlaFloat32LE, HlaFloat64BE,
    HlaFloat64LE, HlaInteger16BE, HlaInteger16LE, HlaInteger32BE, HlaInteger32LE,
    HlaInteger64BE, HlaInteger64LE, HlaOctet, HlaOctetPairBE, HlaOctetPairLE, HlaOpaqueData,
    HlaUnicodeChar, HlaUnicodeString,
};
pub use buffer::ByteWrapper;
pub use config::DecodeLimits;
pub use element::{element_factory, factory_fn, DataElement, DataElementFactory};
pub use error::{
    DecoderError, EncoderError, Error, IndexOutOfBounds, Result, WindowOutOfBounds,
};
pub use factory::EncoderFactory;

#[cfg(feature = "config-loaders")]
pub use loaders::YamlLoader;
