use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryNameError {
    #[error("category name cannot be empty")]
    Empty,
}
