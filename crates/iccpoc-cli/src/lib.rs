pub mod commands;
pub mod generate;
pub mod inspect;

pub use commands::{Args, Subcommands};
