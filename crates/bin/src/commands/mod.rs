//! Subcommand implementations.

pub mod account;
pub mod catalog;
pub mod favorites;
pub mod info;
pub mod users;
