//! Resume screener library

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod input;
pub mod notify;
pub mod output;
pub mod ranking;

pub use config::Config;
pub use error::{Result, ResumeScreenerError};
