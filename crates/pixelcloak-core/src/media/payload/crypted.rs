use std::fmt::{self, Debug, Formatter};

use pixelcloak_cipher::{decrypt_data, encrypt_data, Cipher, Key};

use super::PayloadCipher;
use crate::result::Result;
use crate::CloakError;

/// Seals payloads with an explicit [`Key`], typically one generated per session.
pub struct KeySealed {
    cipher: Cipher,
}

impl KeySealed {
    pub fn new(key: &Key) -> Self {
        Self {
            cipher: Cipher::new(key),
        }
    }
}

impl Debug for KeySealed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "KeySealed")
    }
}

impl PayloadCipher for KeySealed {
    fn seal(&self, secret: &[u8]) -> Result<Vec<u8>> {
        self.cipher.encrypt(secret).map_err(CloakError::Encryption)
    }

    fn open(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        self.cipher.decrypt(sealed).map_err(CloakError::Decryption)
    }
}

/// Seals payloads with a key derived from a password, the salt travels inside the payload
/// so a stego image can be opened in any later run that knows the password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordSealed {
    password: String,
}

impl PasswordSealed {
    pub fn new<I: Into<String>>(password: I) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl Debug for PasswordSealed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordSealed({})", "*".repeat(self.password.len()))
    }
}

impl PayloadCipher for PasswordSealed {
    fn seal(&self, secret: &[u8]) -> Result<Vec<u8>> {
        encrypt_data(&self.password, secret).map_err(CloakError::Encryption)
    }

    fn open(&self, sealed: &[u8]) -> Result<Vec<u8>> {
        decrypt_data(&self.password, sealed).map_err(CloakError::Decryption)
    }
}
