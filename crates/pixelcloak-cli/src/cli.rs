use clap::{Parser, Subcommand};
use dialoguer::Password;
use log::warn;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
}

/// Prompts on the terminal, `None` if there is no terminal to ask on.
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    match prompt.interact() {
        Ok(password) => Some(password),
        Err(e) => {
            warn!("Could not read a password: {e}");
            None
        }
    }
}
