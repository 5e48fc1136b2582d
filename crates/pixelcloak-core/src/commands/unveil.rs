use std::path::Path;

use crate::Result;

pub fn unveil(secret_media: &Path, output_file: &Path, password: Option<String>) -> Result<()> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_output_file(output_file)
        .using_password(password)
        .execute()
}
