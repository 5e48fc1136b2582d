use image::RgbImage;
use log::debug;

use crate::bit_stream::{from_bits, MarkerWindow, END_MARKER_LEN};
use crate::error::CloakError;
use crate::media::image::walker::ChannelIter;
use crate::result::Result;

/// Reads the least significant bits of `stego` in walk order up to the first end marker
/// and returns the bytes before it.
///
/// Fails with [`CloakError::MarkerNotFound`] when the whole image carries no marker and with
/// [`CloakError::MalformedBitstream`] when the bits before the marker do not form whole bytes.
pub fn extract(stego: &RgbImage) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    let mut window = MarkerWindow::default();

    for (address, color) in ChannelIter::new(stego) {
        let bit = color & 1 == 1;
        bits.push(bit);
        if window.push(bit) {
            bits.truncate(bits.len() - END_MARKER_LEN);
            debug!(
                "End marker found after {} payload bits, ending at ({}, {}) channel {}",
                bits.len(),
                address.x,
                address.y,
                address.channel
            );

            return from_bits(&bits);
        }
    }

    Err(CloakError::MarkerNotFound)
}
