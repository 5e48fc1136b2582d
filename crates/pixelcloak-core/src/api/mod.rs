//! Builder style entry points, one per command.

pub mod hide;
pub mod unveil;
pub mod unveil_raw;

mod shared;

pub use shared::*;
