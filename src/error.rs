//! Errors raised while reading list literals such as `[1,4,3]`.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseListError {
    #[error("list literal must be enclosed in '[' and ']'")]
    MissingBrackets,

    #[error("element {index} is not a valid i32")]
    InvalidValue {
        index: usize,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, ParseListError>;
