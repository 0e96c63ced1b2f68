// src/lib.rs
pub mod config;
pub mod error;
pub mod log;

pub mod season;
pub mod table;
pub mod header;
pub mod columns;
pub mod records;

pub mod file;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::ConvertError;
pub use runner::{convert, run, RunSummary};
