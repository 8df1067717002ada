use std::{fmt::Display, io};

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug)]
#[error("{position}: {internal_error}")]
pub struct Error {
    #[source]
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::StreamFault(_) => "StreamFault",
            ErrorImpl::InvalidEncoding { .. } => "InvalidEncoding",
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
        }
    }

    /// Whether scanning can continue after this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.internal_error, ErrorImpl::IllegalCharacter { .. })
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::StreamFault(_) => ErrorTip::None,
            ErrorImpl::InvalidEncoding { bytes } => ErrorTip::Suggestion(format!(
                "Invalid byte sequence {:02x?}, is the input UTF-8 encoded?",
                bytes
            )),
            ErrorImpl::IllegalCharacter { character } => ErrorTip::Suggestion(format!(
                "Unexpected character `{}`, only letters, digits and the symbols ;+-*/=!?.,_(){{}}[]<>\"' are recognised",
                character
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("error reading input stream: {0}")]
    StreamFault(#[from] io::Error),
    #[error("invalid utf-8 sequence: {bytes:?}")]
    InvalidEncoding { bytes: Vec<u8> },
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: String },
}
