use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use pixelcloak_cipher::Key;

use crate::media::Media;
use crate::{CloakError, Result};

use super::{cloak_for, Password};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
    key: Option<Key>,
}

impl UnveilApi {
    /// This is the stego image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file where the unveiled secret will be saved to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password used for decrypting the data
    /// If `None` is passed, a key has to be given via [`UnveilApi::with_key`]
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Decrypt with this key instead of a password
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(CloakError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(CloakError::TargetNotSet);
        };

        let cloak = cloak_for(self.key, self.password)?;
        let stego = Media::from_file(&secret_media)?;
        let secret = cloak.reveal(stego.image())?;
        info!(
            "Unveiled {} bytes from {secret_media:?} into {output_file:?}",
            secret.len()
        );

        fs::write(&output_file, secret).map_err(|source| CloakError::WriteError { source })
    }
}
