// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoding constants and decode-limit configuration.
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: wire constants (length prefix size, BOM, boolean values)
//! - **Level 2 (Dynamic)**: [`DecodeLimits`] carried by every [`ByteWrapper`](crate::ByteWrapper)
//!
//! Limits come from [`DecodeLimits::default`], the environment
//! ([`DecodeLimits::from_env`]) or a YAML profile (`YamlLoader`, feature
//! `config-loaders`).

#[cfg(feature = "config-loaders")]
use serde::Deserialize;

/// Size of every count/length prefix on the wire (HLAinteger32BE).
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Byte-order mark leading every encoded HLAunicodeString.
pub const BYTE_ORDER_MARK: u16 = 0xFEFF;

/// Byte-swapped BOM; the remaining code units are little-endian.
pub const SWAPPED_BYTE_ORDER_MARK: u16 = 0xFFFE;

/// HLAboolean wire value for `false`.
pub const HLA_FALSE: u32 = 0x0000_0000;

/// HLAboolean wire value for `true`.
pub const HLA_TRUE: u32 = 0x0000_0001;

/// Default cap on variable array element counts.
///
/// Far beyond any legitimate attribute value while still catching allocation
/// bombs from malformed buffers.
pub const DEFAULT_MAX_ELEMENT_COUNT: usize = 1_000_000;

/// Default cap on string / opaque data payload bytes (64 MiB).
pub const DEFAULT_MAX_BYTE_LENGTH: usize = 64 * 1024 * 1024;

/// Environment override for [`DecodeLimits::max_element_count`].
pub const ENV_MAX_ELEMENTS: &str = "HLA_ENCODING_MAX_ELEMENTS";

/// Environment override for [`DecodeLimits::max_byte_length`].
pub const ENV_MAX_BYTES: &str = "HLA_ENCODING_MAX_BYTES";

/// Upper bounds applied to length prefixes while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default))]
pub struct DecodeLimits {
    /// Maximum element count accepted for a variable array.
    pub max_element_count: usize,
    /// Maximum payload bytes accepted for one string or opaque blob.
    pub max_byte_length: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_element_count: DEFAULT_MAX_ELEMENT_COUNT,
            max_byte_length: DEFAULT_MAX_BYTE_LENGTH,
        }
    }
}

impl DecodeLimits {
    /// Limits that accept anything addressable.
    pub const fn unlimited() -> Self {
        Self {
            max_element_count: usize::MAX,
            max_byte_length: usize::MAX,
        }
    }

    /// Defaults overridden by `HLA_ENCODING_MAX_ELEMENTS` / `HLA_ENCODING_MAX_BYTES`.
    ///
    /// Unset or unparsable variables keep the default value.
    pub fn from_env() -> Self {
        let mut limits = Self::default();
        if let Some(count) = env_usize(ENV_MAX_ELEMENTS) {
            limits.max_element_count = count;
        }
        if let Some(bytes) = env_usize(ENV_MAX_BYTES) {
            limits.max_byte_length = bytes;
        }
        log::debug!(
            "[hla-encoding] decode limits from env: {} elements, {} bytes",
            limits.max_element_count,
            limits.max_byte_length
        );
        limits
    }

    #[must_use]
    pub const fn with_max_element_count(mut self, count: usize) -> Self {
        self.max_element_count = count;
        self
    }

    #[must_use]
    pub const fn with_max_byte_length(mut self, bytes: usize) -> Self {
        self.max_byte_length = bytes;
        self
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok()?.trim().parse().ok()
}
