//! Common helpers

use crate::{
    error::Error,
    frame::{Coil, Quantity},
};

/// Turn a bool into a u16 coil value
pub fn bool_to_u16_coil(state: bool) -> u16 {
    if state {
        0xFF00
    } else {
        0x0000
    }
}

/// Turn a u16 coil value into a boolean value.
pub fn u16_coil_to_bool(coil: u16) -> Result<bool, Error> {
    match coil {
        0xFF00 => Ok(true),
        0x0000 => Ok(false),
        _ => Err(Error::CoilValue(coil)),
    }
}

/// Calculate the number of bytes required for a given number of coils.
pub const fn packed_coils_len(bitcount: usize) -> usize {
    (bitcount + 7) / 8
}

/// Pack up to 8 coils into a single byte.
///
/// Bit `k` of the result is set iff `coils[k]` is `ON` (LSB first).
/// Slices of more than 8 coils are rejected.
pub fn pack_coils_into_byte(coils: &[Coil]) -> Result<u8, Error> {
    if coils.len() > 8 {
        #[cfg(feature = "log")]
        log::warn!("Cannot pack {} coils into a single byte", coils.len());
        return Err(Error::BitCount(coils.len()));
    }
    let mut byte = 0;
    for (i, b) in coils.iter().enumerate() {
        if *b {
            byte |= 1 << i;
        }
    }
    Ok(byte)
}

///  Pack coils into a byte array.
///
///  It returns the number of bytes used to pack the coils.
pub fn pack_coils(coils: &[Coil], bytes: &mut [u8]) -> Result<usize, Error> {
    let packed_size = packed_coils_len(coils.len());
    if bytes.len() < packed_size {
        return Err(Error::BufferSize);
    }
    for (chunk, byte) in coils.chunks(8).zip(bytes.iter_mut()) {
        *byte = pack_coils_into_byte(chunk)?;
    }
    Ok(packed_size)
}

///  Unpack coils from a byte array.
///
///  The first `count` bits are read LSB first across consecutive bytes.
pub fn unpack_coils(bytes: &[u8], count: Quantity, coils: &mut [Coil]) -> Result<(), Error> {
    if coils.len() < count as usize {
        return Err(Error::BufferSize);
    }
    (0..count).for_each(|i| {
        coils[i as usize] = (bytes[(i / 8u16) as usize] >> (i % 8)) & 0b1 > 0;
    });
    Ok(())
}

/// Unpack all 8 bits of a single byte into coil values (LSB first).
pub fn unpack_byte_coils(value: u8, coils: &mut [Coil]) -> Result<(), Error> {
    unpack_coils(&[value], 8, coils)
}
