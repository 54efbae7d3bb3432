// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Constructed data representations: arrays and records.
//!
//! Members of a constructed type are laid out with their body encodings
//! (no per-member padding), so the encoding is the concatenation of the
//! member encodings.

mod fixed_array;
mod fixed_record;
mod variable_array;
mod variant_record;

pub use fixed_array::HlaFixedArray;
pub use fixed_record::HlaFixedRecord;
pub use variable_array::HlaVariableArray;
pub use variant_record::HlaVariantRecord;

/// Largest member boundary, 1 when there are no members.
fn max_boundary(boundaries: impl Iterator<Item = usize>) -> usize {
    boundaries.max().unwrap_or(1).max(1)
}
