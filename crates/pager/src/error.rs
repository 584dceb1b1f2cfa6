//! Pager errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Pager task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, PagerError>;
