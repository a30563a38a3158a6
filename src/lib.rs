//! Job matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::{JobMatcherError, Result};
pub use matching::MatchEngine;
