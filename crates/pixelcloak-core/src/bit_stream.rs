//! Bit level view of payload bytes.
//!
//! Bits are always ordered most significant bit first per byte. An embedded payload is
//! terminated by [`END_MARKER`], 15 ones followed by a single zero.

use std::io::{ErrorKind, Read};
use std::slice;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::CloakError;
use crate::result::Result;

/// terminates every embedded payload, read from the most significant bit down
pub const END_MARKER: u16 = 0b1111_1111_1111_1110;
pub const END_MARKER_LEN: usize = 16;

/// Lazily yields the bits of everything readable from `I`, MSB first.
pub struct BitIterator<I> {
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I: Read> BitIterator<I> {
    fn next_byte(&mut self) -> Option<u8> {
        let mut b = 0;
        loop {
            return match self.iter.read(slice::from_mut(&mut b)) {
                Ok(0) => None,
                Ok(..) => Some(b),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => None,
            };
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.i % 8;
        if bit == 0 {
            self.byte = self.next_byte();
        }
        let byte = self.byte?;
        self.i += 1;

        Some((byte >> (7 - bit)) & 1 == 1)
    }
}

/// the 16 bits of [`END_MARKER`], MSB first
pub fn end_marker_bits() -> impl Iterator<Item = bool> + Clone {
    (0..END_MARKER_LEN)
        .rev()
        .map(|shift| (END_MARKER >> shift) & 1 == 1)
}

/// the bits of `payload` followed by the end marker, exactly what gets embedded
pub fn payload_bits(payload: &[u8]) -> impl Iterator<Item = bool> + '_ {
    BitIterator::new(payload).chain(end_marker_bits())
}

/// number of bits needed to embed `payload_len` bytes including the end marker
pub fn required_bits(payload_len: usize) -> usize {
    payload_len * 8 + END_MARKER_LEN
}

pub fn to_bits(bytes: &[u8]) -> Vec<bool> {
    BitIterator::new(bytes).collect()
}

pub fn from_bits(bits: &[bool]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(CloakError::MalformedBitstream { bits: bits.len() });
    }

    let mut bytes = Vec::with_capacity(bits.len() / 8);
    {
        let mut writer = BitWriter::endian(&mut bytes, BigEndian);
        for bit in bits {
            writer.write_bit(*bit)?;
        }
    }

    Ok(bytes)
}

/// Sliding window over the last 16 bits seen, reports when they spell the end marker.
#[derive(Debug, Default)]
pub struct MarkerWindow {
    window: u16,
    filled: usize,
}

impl MarkerWindow {
    /// shifts `bit` in, returns true once the last 16 bits equal [`END_MARKER`]
    pub fn push(&mut self, bit: bool) -> bool {
        self.window = (self.window << 1) | u16::from(bit);
        if self.filled < END_MARKER_LEN {
            self.filled += 1;
        }

        self.filled == END_MARKER_LEN && self.window == END_MARKER
    }
}
