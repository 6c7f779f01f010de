pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod release;
pub mod ui;

pub use error::{FinalizeError, Result};
