pub mod append;
pub mod commands;
pub mod config;
pub mod digest;
pub mod greeting;
pub mod notifier;
pub mod state;
pub mod webhook;

#[cfg(test)]
mod testing;
