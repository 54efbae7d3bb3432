// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HLAvariableArray: a resizable homogeneous sequence.
//!
//! # Wire format
//!
//! ```text
//! [count: i32 BE] [element 0] [element 1] ... [element count-1]
//! ```
//!
//! Decoding resizes the array to the wire count. Existing elements are
//! decoded in place; new slots come from the element factory.

use std::fmt;

use crate::buffer::ByteWrapper;
use crate::config::LENGTH_PREFIX_SIZE;
use crate::element::{element_factory, impl_element_any, DataElement, DataElementFactory};
use crate::error::{DecoderError, EncoderError, IndexOutOfBounds};

pub struct HlaVariableArray<T> {
    factory: DataElementFactory<T>,
    elements: Vec<T>,
}

impl<T: DataElement> HlaVariableArray<T> {
    /// Empty array; `factory` fills slots created by `resize` or decode.
    pub fn new(factory: DataElementFactory<T>) -> Self {
        Self {
            factory,
            elements: Vec::new(),
        }
    }

    /// Array pre-filled with `size` factory-created elements.
    pub fn with_size(factory: DataElementFactory<T>, size: usize) -> Self {
        let mut array = Self::new(factory);
        array.resize(size);
        array
    }

    pub fn from_elements(factory: DataElementFactory<T>, elements: Vec<T>) -> Self {
        Self { factory, elements }
    }

    pub fn add_element(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Grow with factory-created elements, or truncate keeping the prefix.
    pub fn resize(&mut self, size: usize) {
        if size <= self.elements.len() {
            self.elements.truncate(size);
            return;
        }
        let start = self.elements.len();
        self.elements.reserve(size - start);
        for index in start..size {
            self.elements.push((self.factory)(index));
        }
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.size())?;
        Ok(&self.elements[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.size())?;
        Ok(&mut self.elements[index])
    }

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

impl<T: DataElement + Default> Default for HlaVariableArray<T> {
    fn default() -> Self {
        Self::new(element_factory())
    }
}

impl<T: Clone> Clone for HlaVariableArray<T> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            elements: self.elements.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for HlaVariableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HlaVariableArray")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

/// Equality compares elements only; factories are not comparable.
impl<T: PartialEq> PartialEq for HlaVariableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<'a, T: DataElement> IntoIterator for &'a HlaVariableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: DataElement + Clone> DataElement for HlaVariableArray<T> {
    fn octet_boundary(&self) -> usize {
        self.encoded_length()
    }

    /// The count prefix starts right after the previous value.
    fn alignment(&self) -> usize {
        1
    }

    fn encoded_length(&self) -> usize {
        LENGTH_PREFIX_SIZE
            + self
                .elements
                .iter()
                .map(DataElement::encoded_length)
                .sum::<usize>()
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        buffer.put_length("variable array count", self.elements.len())?;
        for element in &self.elements {
            element.write_to(buffer)?;
        }
        Ok(())
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        let limit = buffer.limits().max_element_count;
        let count = buffer.get_length("variable array count", limit)?;
        if count != self.elements.len() {
            log::trace!(
                "[hla-encoding] variable array resized by decode: {} -> {}",
                self.elements.len(),
                count
            );
            self.resize(count);
        }
        for element in &mut self.elements {
            element.read_from(buffer)?;
        }
        Ok(())
    }

    impl_element_any!();
}
