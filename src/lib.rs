pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod target;
pub mod visuals;
