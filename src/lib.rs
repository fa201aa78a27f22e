//! Resume tailor: keyword extraction and resume tailoring engine

pub mod cli;
pub mod config;
pub mod distribution;
pub mod error;
pub mod extraction;
pub mod output;
pub mod pipeline;

pub use config::Config;
pub use error::{Result, TailorError};
