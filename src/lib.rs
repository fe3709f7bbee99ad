pub use self::{cli::Cli, commands::Direction};

pub mod cli;
pub mod commands;
pub mod output;
mod sam;
