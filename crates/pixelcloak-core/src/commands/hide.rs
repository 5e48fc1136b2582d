use std::path::Path;

use crate::Result;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    secret_file: &Path,
    password: Option<String>,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_image(media)
        .with_output(write_to_file)
        .with_secret(secret_file)
        .using_password(password)
        .execute()
}
