use super::*;
use crate::{error::*, util::*};

/// Packed coils
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coils<'c> {
    pub(crate) data: RawData<'c>,
    pub(crate) quantity: usize,
}

impl<'c> Coils<'c> {
    /// Pack coils defined by an bool slice into a byte buffer.
    pub fn from_bools(bools: &[Coil], target: &'c mut [u8]) -> Result<Self, Error> {
        pack_coils(bools, target)?;
        Ok(Coils {
            data: target,
            quantity: bools.len(),
        })
    }
    /// Borrow an already packed coil buffer as read from the wire.
    pub fn from_packed(data: RawData<'c>, quantity: usize) -> Result<Self, Error> {
        if data.len() < packed_coils_len(quantity) {
            return Err(Error::BufferSize);
        }
        Ok(Coils { data, quantity })
    }
    /// Quantity of coils
    pub const fn len(&self) -> usize {
        self.quantity
    }
    ///  Returns `true` if the container has no items.
    pub const fn is_empty(&self) -> bool {
        self.quantity == 0
    }
    /// Number of bytes the packed representation occupies.
    pub const fn packed_len(&self) -> usize {
        packed_coils_len(self.quantity)
    }
    /// Get a specific coil.
    pub fn get(&self, idx: usize) -> Option<Coil> {
        if idx + 1 > self.quantity {
            return None;
        }
        Some((self.data[(idx as u16 / 8u16) as usize] >> (idx % 8)) & 0b1 > 0)
    }
    /// Unpack all coils into a target buffer (one value per bit).
    pub fn copy_to(&self, target: &mut [Coil]) -> Result<(), Error> {
        unpack_coils(self.data, self.quantity as Quantity, target)
    }
}

/// Coils iterator.
// TODO: crate an generic iterator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoilsIter<'c> {
    cnt: usize,
    coils: Coils<'c>,
}

impl<'c> Iterator for CoilsIter<'c> {
    type Item = Coil;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.coils.get(self.cnt);
        self.cnt += 1;
        result
    }
}

impl<'c> IntoIterator for Coils<'c> {
    type Item = Coil;
    type IntoIter = CoilsIter<'c>;

    fn into_iter(self) -> Self::IntoIter {
        CoilsIter {
            cnt: 0,
            coils: self,
        }
    }
}
