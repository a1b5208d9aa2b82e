use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("add_line takes 1 or 4 to 7 arguments, got {0}")]
    InvalidArity(usize),
    #[error("argument {index} must be {expected}")]
    InvalidArgument { index: usize, expected: &'static str },
    #[error("settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
