// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! YAML decode-limit loader.
//!
//! # Example YAML
//!
//! ```yaml
//! # encoding.yaml
//! decode_limits:
//!   max_element_count: 4096
//!   max_byte_length: 65536
//! ```
//!
//! Missing keys keep their [`DecodeLimits::default`] value.

use crate::config::DecodeLimits;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// YAML decode-limit loader.
pub struct YamlLoader;

/// Root YAML document structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct YamlEncodingDocument {
    /// Limits applied to length prefixes while decoding.
    pub decode_limits: DecodeLimits,
}

impl YamlLoader {
    /// Load an encoding document from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<YamlEncodingDocument> {
        let path = path.as_ref();
        let yaml_content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read YAML file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse_yaml(&yaml_content)
    }

    /// Parse YAML content.
    pub fn parse_yaml(yaml_content: &str) -> Result<YamlEncodingDocument> {
        serde_yaml::from_str(yaml_content)
            .map_err(|e| Error::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load only the decode limits from a YAML file.
    pub fn load_limits<P: AsRef<Path>>(path: P) -> Result<DecodeLimits> {
        let limits = Self::load_from_file(path)?.decode_limits;
        log::debug!(
            "[hla-encoding] decode limits from YAML: {} elements, {} bytes",
            limits.max_element_count,
            limits.max_byte_length
        );
        Ok(limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MAX_BYTE_LENGTH, DEFAULT_MAX_ELEMENT_COUNT};

    #[test]
    fn test_parse_full_document() {
        let yaml = r#"
decode_limits:
  max_element_count: 4096
  max_byte_length: 65536
"#;
        let doc = YamlLoader::parse_yaml(yaml).unwrap();
        assert_eq!(doc.decode_limits.max_element_count, 4096);
        assert_eq!(doc.decode_limits.max_byte_length, 65536);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let doc = YamlLoader::parse_yaml("decode_limits:\n  max_element_count: 10\n").unwrap();
        assert_eq!(doc.decode_limits.max_element_count, 10);
        assert_eq!(doc.decode_limits.max_byte_length, DEFAULT_MAX_BYTE_LENGTH);

        let doc = YamlLoader::parse_yaml("{}").unwrap();
        assert_eq!(doc.decode_limits.max_element_count, DEFAULT_MAX_ELEMENT_COUNT);
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = YamlLoader::parse_yaml("decode_limits:\n  max_element_count: lots\n").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.starts_with("Failed to parse YAML")));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = YamlLoader::load_from_file("/nonexistent/hla/encoding.yaml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
