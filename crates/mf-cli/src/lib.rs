//! mf-cli library
//!
//! Exports the HTTP client, the command definitions and the dispatcher so
//! the binary and the integration tests share one implementation.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod dispatch;
pub mod favorite_commands;
pub mod logger;
pub mod movie_commands;
pub mod profile_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
