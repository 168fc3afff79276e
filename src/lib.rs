// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logger;
pub mod processing;
pub mod summary;

pub use error::{Result, SnowMaskError};
