// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HLAfixedRecord: an ordered heterogeneous sequence of fields.
//!
//! Fields are encoded back to back in declaration order with no prefix.
//! A record with no fields cannot be encoded.

use crate::buffer::ByteWrapper;
use crate::element::{impl_element_any, DataElement};
use crate::error::{DecoderError, EncoderError, IndexOutOfBounds};

use super::max_boundary;

#[derive(Debug, Clone, Default)]
pub struct HlaFixedRecord {
    fields: Vec<Box<dyn DataElement>>,
}

impl HlaFixedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field after the existing ones.
    pub fn add<E: DataElement>(&mut self, element: E) {
        self.fields.push(Box::new(element));
    }

    pub fn add_boxed(&mut self, element: Box<dyn DataElement>) {
        self.fields.push(element);
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with_field<E: DataElement>(mut self, element: E) -> Self {
        self.add(element);
        self
    }

    pub fn size(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&dyn DataElement, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.size())?;
        Ok(self.fields[index].as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut dyn DataElement, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.size())?;
        Ok(self.fields[index].as_mut())
    }

    /// Typed field access; `Ok(None)` when the field has another type.
    pub fn get_as<E: DataElement>(&self, index: usize) -> Result<Option<&E>, IndexOutOfBounds> {
        Ok(self.get(index)?.downcast_ref::<E>())
    }

    pub fn get_as_mut<E: DataElement>(
        &mut self,
        index: usize,
    ) -> Result<Option<&mut E>, IndexOutOfBounds> {
        Ok(self.get_mut(index)?.downcast_mut::<E>())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DataElement> {
        self.fields.iter().map(|field| &**field)
    }
}

impl DataElement for HlaFixedRecord {
    fn octet_boundary(&self) -> usize {
        max_boundary(self.fields.iter().map(|field| field.octet_boundary()))
    }

    fn alignment(&self) -> usize {
        max_boundary(self.fields.iter().map(|field| field.alignment()))
    }

    fn encoded_length(&self) -> usize {
        self.fields.iter().map(|field| field.encoded_length()).sum()
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        if self.fields.is_empty() {
            return Err(EncoderError::EmptyRecord);
        }
        for field in &self.fields {
            field.write_to(buffer)?;
        }
        Ok(())
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        for field in &mut self.fields {
            field.read_from(buffer)?;
        }
        Ok(())
    }

    impl_element_any!();
}
