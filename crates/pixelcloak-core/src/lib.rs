//! # Pixelcloak Core API
//!
//! Hides an encrypted secret in the least significant bits of an image's color channels and
//! recovers it again. The pieces, bottom up:
//! - [`bit_stream`] turns bytes into bits (MSB first) and defines the end marker
//! - [`media::image::ChannelWalk`] fixes the order in which color channels carry bits
//! - [`media::image::embed`] and [`media::image::extract`] do the actual hiding and unveiling
//! - [`media::payload::PayloadCipher`] seals the secret before it gets hidden
//! - [`PixelCloak`] ties encryption and embedding together
//!
//! # Usage Examples
//!
//! ## Hide and unveil in memory
//!
//! ```rust
//! use pixelcloak_core::{Key, PixelCloak, RgbImage};
//!
//! let key = Key::generate();
//! let cloak = PixelCloak::with_key(&key);
//!
//! let cover = RgbImage::from_pixel(64, 64, image::Rgb([120, 80, 200]));
//! let stego = cloak.conceal(cover, b"secret image bytes").expect("Failed to hide secret");
//!
//! let secret = cloak.reveal(&stego).expect("Failed to unveil secret");
//! assert_eq!(secret, b"secret image bytes");
//! ```
//!
//! ## Hide a file inside an image file
//!
//! ```rust,no_run
//! pixelcloak_core::api::hide::prepare()
//!     .with_secret("secret.png")          // the raw bytes of this file get hidden
//!     .with_password("SuperSecret42")     // will encrypt all the data with this password
//!     .with_image("carrier-image.jpg")
//!     .with_output("image-with-a-secret-inside.png")
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_stream;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use pixelcloak_cipher::Key;

pub use crate::error::CloakError;
pub use crate::media::payload::{KeySealed, PasswordSealed, PayloadCipher};
pub use crate::media::{Media, Persist, RgbImage};
pub use crate::result::Result;

/// Encryption plus LSB embedding in one place.
///
/// All methods take `&self`, one instance can serve concurrent requests as long as
/// every request brings its own image buffer.
pub struct PixelCloak {
    cipher: Box<dyn PayloadCipher>,
}

impl PixelCloak {
    pub fn new(cipher: impl PayloadCipher + 'static) -> Self {
        Self {
            cipher: Box::new(cipher),
        }
    }

    pub fn with_key(key: &Key) -> Self {
        Self::new(KeySealed::new(key))
    }

    pub fn with_password<S: Into<String>>(password: S) -> Self {
        Self::new(PasswordSealed::new(password))
    }

    /// seals `secret` and hides it in `cover`, returns the stego image
    pub fn conceal(&self, cover: RgbImage, secret: &[u8]) -> Result<RgbImage> {
        let sealed = self.cipher.seal(secret)?;

        media::image::embed(cover, &sealed)
    }

    /// unveils the sealed payload of `stego` and opens it
    pub fn reveal(&self, stego: &RgbImage) -> Result<Vec<u8>> {
        let sealed = media::image::extract(stego)?;

        self.cipher.open(&sealed)
    }
}


#[cfg(test)]
mod test_utils {
    use std::path::{Path, PathBuf};

    use image::{ImageBuffer, Rgb, RgbImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2 ) | 1,0 -> (3, 4, 5 ) | ...
    /// | 0,1 -> (15,16,17) | 1,1 -> (18,19,20) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (3 * x + 15 * y) as u8;
            Rgb([i, i + 1, i + 2])
        })
    }

    /// colors grow by one per channel in walk order, so the n-th channel holds `n`
    pub fn prepare_4x6_linear_growing_colors() -> RgbImage {
        let mut img = ImageBuffer::new(4, 6);
        let mut i = 0;
        for y in 0..img.height() {
            for x in 0..img.width() {
                let pi = img.get_pixel_mut(x, y);
                *pi = Rgb([i, i + 1, i + 2]);
                i += 3;
            }
        }

        img
    }

    pub fn prepare_solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb(color))
    }

    /// deterministic pseudo random colors, so the lowest bits are mixed like in a photo
    pub fn prepare_noisy_image(width: u32, height: u32) -> RgbImage {
        let mut state: u32 = 0x2545_f491 ^ (width << 16) ^ height;
        ImageBuffer::from_fn(width, height, |_, _| {
            let mut next = || {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            };
            Rgb([next(), next(), next()])
        })
    }

    pub fn save_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
        let path = dir.join(name);
        image.save(&path).expect("Cannot save test image");
        path
    }
}
