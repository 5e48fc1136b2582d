use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a PNG or JPEG file inside a PNG or JPEG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image, PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image, PNG or JPEG
    #[arg(
        short = 's',
        long = "secret",
        value_name = "secret file",
        required = true
    )]
    pub secret_file: PathBuf,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let password = if self.password.is_none() {
            crate::cli::ask_for_password(true)
        } else {
            self.password
        };

        pixelcloak_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.secret_file,
            password,
        )
    }
}
