use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::extract;
use crate::media::Media;
use crate::{CloakError, Result};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnveilRawApi {
    /// This is the stego image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where the still sealed payload will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(CloakError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(CloakError::TargetNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let sealed = extract(media.image())?;
        info!("Dumping {} raw bytes into {destination_file:?}", sealed.len());

        fs::write(&destination_file, sealed).map_err(|source| CloakError::WriteError { source })
    }
}
