mod password;

pub use password::*;

use pixelcloak_cipher::Key;

use crate::{CloakError, PixelCloak, Result};

/// A key wins over a password, having neither is an error.
pub(crate) fn cloak_for(key: Option<Key>, password: Password) -> Result<PixelCloak> {
    match (key, password.into_inner()) {
        (Some(key), _) => Ok(PixelCloak::with_key(&key)),
        (None, Some(password)) => Ok(PixelCloak::with_password(password)),
        (None, None) => Err(CloakError::MissingKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_key_or_password() {
        assert!(matches!(
            cloak_for(None, Password::default()),
            Err(CloakError::MissingKey)
        ));
    }

    #[test]
    fn should_prefer_the_key_over_the_password() -> Result<()> {
        let key = Key::from_bytes([7; 32]);
        let sealed = cloak_for(Some(Key::from_bytes([7; 32])), "ignored".into())?
            .conceal(crate::RgbImage::new(30, 30), b"x")?;

        assert_eq!(PixelCloak::with_key(&key).reveal(&sealed)?, b"x");
        Ok(())
    }
}
