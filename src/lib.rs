pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod image;
pub mod manifest;
pub mod matrix;

pub use anyhow::Result;
