mod commands;
mod menu;

pub use commands::{decode, encode, stats, Cli, Commands};
pub use menu::run_menu;
