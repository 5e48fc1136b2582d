use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::Path;

pub use image::RgbImage;
use log::error;

use crate::error::CloakError;
use crate::result::Result;

use super::Persist;

/// file extensions accepted for carrier images and for secret files
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// a decoded carrier image, always 8 bit RGB no matter what the source file stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        accepted_extension(f)?;
        let image = image::open(f)
            .map_err(|e| {
                error!("Error decoding image {f:?}: {e}");
                CloakError::InvalidImageMedia
            })?
            .to_rgb8();

        Ok(Self { image })
    }

    /// decodes an in-memory PNG or JPEG, the format is guessed from the content
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|_e| CloakError::InvalidImageMedia)?
            .to_rgb8();

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// stores the image losslessly as PNG
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                CloakError::ImageEncodingError
            })
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        if extension_of(file).as_deref() != Some("png") {
            return Err(CloakError::LossyTargetFormat);
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            CloakError::WriteError { source: e }
        })?;

        self.save_to_writer(f)
    }
}

/// reads the raw bytes of a secret file, which has to be one of the [`ACCEPTED_EXTENSIONS`]
pub fn read_secret_file(f: &Path) -> Result<Vec<u8>> {
    accepted_extension(f)?;

    fs::read(f).map_err(|source| CloakError::ReadError { source })
}

fn extension_of(f: &Path) -> Option<String> {
    f.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

fn accepted_extension(f: &Path) -> Result<String> {
    match extension_of(f) {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(CloakError::UnsupportedMedia),
    }
}
