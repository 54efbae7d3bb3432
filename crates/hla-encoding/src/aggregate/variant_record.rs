// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HLAvariantRecord: a discriminated union.
//!
//! # Wire format
//!
//! ```text
//! [discriminant] [active value, omitted when none is registered]
//! ```
//!
//! The record owns a registry of alternatives keyed by discriminant value.
//! An alternative may be registered without a value (discriminant-only
//! encoding). Decoding a discriminant with no registered alternative fails
//! and leaves the record unchanged.

use crate::buffer::ByteWrapper;
use crate::element::{impl_element_any, DataElement};
use crate::error::{DecoderError, EncoderError};

type Alternative<D> = (D, Option<Box<dyn DataElement>>);

#[derive(Debug, Clone)]
pub struct HlaVariantRecord<D> {
    discriminant: D,
    variants: Vec<Alternative<D>>,
}

impl<D: DataElement + Clone + PartialEq> HlaVariantRecord<D> {
    /// Record with `discriminant` active and no registered alternatives.
    pub fn new(discriminant: D) -> Self {
        Self {
            discriminant,
            variants: Vec::new(),
        }
    }

    /// Register the alternative for `discriminant`, replacing any previous one.
    ///
    /// The active discriminant is left unchanged.
    pub fn set_variant(&mut self, discriminant: D, value: Option<Box<dyn DataElement>>) {
        match self.position(&discriminant) {
            Some(index) => self.variants[index].1 = value,
            None => self.variants.push((discriminant, value)),
        }
    }

    /// Shorthand for `set_variant(discriminant, Some(Box::new(value)))`.
    pub fn add_variant<E: DataElement>(&mut self, discriminant: D, value: E) {
        self.set_variant(discriminant, Some(Box::new(value)));
    }

    /// Builder form of [`add_variant`](Self::add_variant).
    #[must_use]
    pub fn with_variant<E: DataElement>(mut self, discriminant: D, value: E) -> Self {
        self.add_variant(discriminant, value);
        self
    }

    /// Drop the alternative for `discriminant`; returns whether one existed.
    pub fn remove_variant(&mut self, discriminant: &D) -> bool {
        match self.position(discriminant) {
            Some(index) => {
                self.variants.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_variant(&self, discriminant: &D) -> bool {
        self.position(discriminant).is_some()
    }

    /// Make `discriminant` the active alternative.
    pub fn set_discriminant(&mut self, discriminant: D) {
        if discriminant != self.discriminant {
            log::trace!(
                "[hla-encoding] variant discriminant {:?} -> {:?}",
                self.discriminant,
                discriminant
            );
        }
        self.discriminant = discriminant;
    }

    pub fn discriminant(&self) -> &D {
        &self.discriminant
    }

    /// Value of the active alternative; `None` when it is unregistered or has no value.
    pub fn get_value(&self) -> Option<&dyn DataElement> {
        let index = self.position(&self.discriminant)?;
        self.variants[index].1.as_deref()
    }

    pub fn get_value_mut(&mut self) -> Option<&mut dyn DataElement> {
        let index = self.position(&self.discriminant)?;
        self.variants[index].1.as_deref_mut()
    }

    /// Typed view of the active value.
    pub fn get_value_as<E: DataElement>(&self) -> Option<&E> {
        self.get_value()?.downcast_ref::<E>()
    }

    pub fn get_value_as_mut<E: DataElement>(&mut self) -> Option<&mut E> {
        self.get_value_mut()?.downcast_mut::<E>()
    }

    /// Registered discriminant values, in registration order.
    pub fn discriminants(&self) -> impl Iterator<Item = &D> {
        self.variants.iter().map(|(discriminant, _)| discriminant)
    }

    fn position(&self, discriminant: &D) -> Option<usize> {
        self.variants.iter().position(|(key, _)| key == discriminant)
    }
}

impl<D: DataElement + Clone + PartialEq> DataElement for HlaVariantRecord<D> {
    fn octet_boundary(&self) -> usize {
        let value = self.get_value().map_or(1, |value| value.octet_boundary());
        self.discriminant.octet_boundary().max(value)
    }

    /// Widest alignment over the discriminant and every registered value,
    /// whichever alternative is active.
    fn alignment(&self) -> usize {
        self.variants
            .iter()
            .filter_map(|(_, value)| value.as_ref())
            .map(|value| value.alignment())
            .fold(self.discriminant.alignment(), usize::max)
    }

    fn encoded_length(&self) -> usize {
        self.discriminant.encoded_length()
            + self.get_value().map_or(0, |value| value.encoded_length())
    }

    fn write_to(&self, buffer: &mut ByteWrapper) -> Result<(), EncoderError> {
        self.discriminant.write_to(buffer)?;
        if let Some(value) = self.get_value() {
            value.write_to(buffer)?;
        }
        Ok(())
    }

    fn read_from(&mut self, buffer: &mut ByteWrapper) -> Result<(), DecoderError> {
        let mut discriminant = self.discriminant.clone();
        discriminant.read_from(buffer)?;

        let index = self
            .position(&discriminant)
            .ok_or_else(|| DecoderError::UnknownDiscriminant(format!("{discriminant:?}")))?;

        let value = match &self.variants[index].1 {
            Some(registered) => {
                let mut value = registered.clone();
                value.read_from(buffer)?;
                Some(value)
            }
            None => None,
        };

        self.variants[index].1 = value;
        self.set_discriminant(discriminant);
        Ok(())
    }

    impl_element_any!();
}
