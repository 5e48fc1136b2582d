use std::fmt::{self, Debug, Formatter};

use argon2::{Argon2, ParamsBuilder};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::CipherError;
use crate::Result;

pub const KEY_LEN: usize = 32;

/// A 256 bit symmetric key.
///
/// The key is owned by whoever created it (a session, a request, a test) and is
/// wiped from memory when dropped. Data sealed under a generated key can only be
/// opened with that very key, there is no way to recover it later.
#[derive(Clone)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// generates a fresh random key from the operating system RNG
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// derives a key from a password with argon2id, the same password and salt always give the same key
    pub fn derive_from_password(password: &str, salt: &[u8]) -> Result<Self> {
        let mut key = [0u8; KEY_LEN];
        default_secure_argon()?
            .hash_password_into(password.as_bytes(), salt, &mut key)
            .map_err(CipherError::KeyDerivation)?;

        Ok(Self(key))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key(********)")
    }
}

fn default_secure_argon<'key>() -> Result<Argon2<'key>> {
    // increased time costs to make it more secure
    let params = ParamsBuilder::default()
        .t_cost(10)
        .output_len(KEY_LEN)
        .build()
        .map_err(CipherError::KeyDerivationParam)?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_distinct_keys() {
        let a = Key::generate();
        let b = Key::generate();

        assert_ne!(a.as_bytes(), b.as_bytes());
        assert_ne!(a.as_bytes(), &[0u8; KEY_LEN]);
    }

    #[test]
    fn should_derive_the_same_key_for_the_same_password_and_salt() {
        let salt = rand::random::<[u8; 32]>();
        let a = Key::derive_from_password("hunter42", &salt).unwrap();
        let b = Key::derive_from_password("hunter42", &salt).unwrap();
        let c = Key::derive_from_password("hunter43", &salt).unwrap();

        assert_eq!(a.as_bytes(), b.as_bytes());
        assert_ne!(a.as_bytes(), c.as_bytes());
    }

    #[test]
    fn should_not_leak_key_material_via_debug() {
        let key = Key::from_bytes([0x42; KEY_LEN]);

        assert_eq!(format!("{:?}", key), "Key(********)");
    }
}
