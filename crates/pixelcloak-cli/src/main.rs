use clap::Parser;
use log::error;

use pixelcloak_core::CloakError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, CloakError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::UnveilRaw(args) => args.run(),
    };

    if let Err(e) = &result {
        error!("{e}");
    }

    result
}
