// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decode-limit profile loaders.
//!
//! # Example
//!
//! ```rust,ignore
//! use hla_encoding::loaders::YamlLoader;
//!
//! let limits = YamlLoader::load_limits("encoding.yaml")?;
//! let mut buffer = ByteWrapper::from_vec(bytes).with_limits(limits);
//! ```

#[cfg(feature = "config-loaders")]
pub mod yaml;

#[cfg(feature = "config-loaders")]
pub use yaml::{YamlEncodingDocument, YamlLoader};
