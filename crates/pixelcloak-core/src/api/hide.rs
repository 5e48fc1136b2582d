use std::path::{Path, PathBuf};

use log::info;
use pixelcloak_cipher::Key;

use crate::media::{read_secret_file, Media, Persist};
use crate::{CloakError, Result};

use super::{cloak_for, Password};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    key: Option<Key>,
}

impl HideApi {
    /// The file whose raw bytes get hidden, a PNG or JPEG image
    pub fn with_secret<A: AsRef<Path>>(mut self, secret_file: A) -> Self {
        self.secret = Some(secret_file.as_ref().to_path_buf());
        self
    }

    /// The carrier image, a PNG or JPEG
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the stego image goes, always a PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, a key has to be given via [`HideApi::with_key`]
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Encrypt with this key instead of a password
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(CloakError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(CloakError::TargetNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(CloakError::MissingSecret);
        };

        let cloak = cloak_for(self.key, self.password)?;
        let cover = Media::from_file(&image)?;
        let data = read_secret_file(&secret)?;
        info!(
            "Hiding {} bytes of {secret:?} in {image:?} ({}x{})",
            data.len(),
            cover.image().width(),
            cover.image().height()
        );

        let stego = Media::from_image(cloak.conceal(cover.into_image(), &data)?);
        stego.save_as(&output)
    }
}
