// src/error.rs
//! Error types for the data loader

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while loading the job list.
///
/// All three variants are absorbed at the board boundary and turned into a
/// degraded status; none of them ever propagates past the loader as a panic
/// or crash.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server responded with status {0}")]
    BadStatus(StatusCode),

    #[error("response is not a job listing array: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LoadError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            LoadError::BadStatus(status)
        } else {
            LoadError::Transport(err)
        }
    }
}
