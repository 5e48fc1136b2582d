use image::RgbImage;
use log::debug;

use crate::bit_stream::{payload_bits, required_bits};
use crate::error::CloakError;
use crate::media::image::walker::{ChannelIterMut, ChannelWalk};
use crate::result::Result;

/// overwrites the least significant bit of a color channel, the upper 7 bits stay untouched
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// number of bits the image can carry, one per color channel
pub fn capacity_bits(image: &RgbImage) -> usize {
    ChannelWalk::over(image).capacity()
}

/// Hides `payload` followed by the end marker in the cover image and returns it as stego image.
///
/// The cover is consumed, so no caller can keep using (or share) the buffer that got modified.
pub fn embed(mut cover: RgbImage, payload: &[u8]) -> Result<RgbImage> {
    embed_in_place(&mut cover, payload)?;

    Ok(cover)
}

/// Hides `payload` followed by the end marker in `image`.
///
/// Capacity is checked before the first channel is touched, on
/// [`CloakError::InsufficientCapacity`] the image is left exactly as it was.
pub fn embed_in_place(image: &mut RgbImage, payload: &[u8]) -> Result<()> {
    let required = required_bits(payload.len());
    let available = capacity_bits(image);
    if required > available {
        return Err(CloakError::InsufficientCapacity {
            required,
            available,
        });
    }

    let mut written = 0;
    for (bit, (_, color)) in payload_bits(payload).zip(ChannelIterMut::new(image)) {
        color.hide_bit(bit);
        written += 1;
    }
    debug_assert_eq!(written, required);
    debug!(
        "Embedded {} payload bytes using {written} of {available} channels",
        payload.len()
    );

    Ok(())
}
