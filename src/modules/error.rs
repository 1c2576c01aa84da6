use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid map: {0}")]
    InvalidMap(&'static str),
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
