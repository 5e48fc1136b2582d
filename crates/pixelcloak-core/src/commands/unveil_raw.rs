use std::path::Path;

use crate::Result;

/// unveil the sealed payload, no decryption is happening.
/// Just a raw binary dump of the bytes in front of the end marker.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path) -> Result<()> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
