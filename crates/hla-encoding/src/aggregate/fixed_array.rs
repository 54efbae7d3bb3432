// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HLAfixedArray: a statically-sized homogeneous sequence.
//!
//! Elements are encoded back to back with no count prefix. Decoding always
//! consumes exactly `size()` elements; the shape is fixed at construction.

use crate::buffer::ByteWrapper;
use crate::element::{impl_element_any, DataElement, DataElementFactory};
use crate::error::{DecoderError, EncoderError, IndexOutOfBounds};

use super::max_boundary;

#[derive(Debug, Clone, PartialEq)]
pub struct HlaFixedArray<T> {
    elements: Vec<T>,
}

impl<T: DataElement> HlaFixedArray<T> {
    /// `size` elements, each created by `factory(index)`.
    pub fn new(factory: &DataElementFactory<T>, size: usize) -> Self {
        Self {
            elements: (0..size).map(factory.as_ref()).collect(),
        }
    }

    /// Array whose size is the length of `elements`.
    pub fn from_elements(elements: Vec<T>) -> Self {
        Self { elements }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.size())?;
        Ok(&self.elements[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.size())?;
        Ok(&mut self.elements[index])
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<'a, T: DataElement> IntoIterator for &'a HlaFixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: DataElement + Clone> DataElement for HlaFixedArray<T> {
    fn octet_boundary(&self) -> usize {
        max_boundary(self.elements.iter().map(DataElement::octet_boundary))
    }

    fn alignment(&self) -> usize {
        max_boundary(self.elements.iter().map(DataElement::alignment))
    }

    fn encoded_length(&self) -> usize {
        self.elements.iter().map(DataElement::encoded_length).sum()
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        for element in &self.elements {
            element.write_to(buffer)?;
        }
        Ok(())
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        for element in &mut self.elements {
            element.read_from(buffer)?;
        }
        Ok(())
    }

    impl_element_any!();
}
