//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::io;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_stream_fault_error() {
    let error = Error::new(
        ErrorImpl::StreamFault(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
        Position { line: 3, column: 7 },
    );

    assert_eq!(error.get_error_name(), "StreamFault");
    assert!(error.is_fatal());
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.to_string(), "3:7: error reading input stream: pipe closed");
}

#[test]
fn test_stream_fault_from_io_error() {
    let error_impl: ErrorImpl = io::Error::new(io::ErrorKind::Other, "disk on fire").into();

    assert!(matches!(error_impl, ErrorImpl::StreamFault(_)));
}

#[test]
fn test_invalid_encoding_error() {
    let error = Error::new(
        ErrorImpl::InvalidEncoding { bytes: vec![0xFF] },
        Position::start(),
    );

    assert_eq!(error.get_error_name(), "InvalidEncoding");
    assert!(error.is_fatal());
    assert_eq!(*error.get_position(), Position::start());

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("[ff]")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_illegal_character_error() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter {
            character: "@".to_string(),
        },
        Position { line: 1, column: 9 },
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert!(!error.is_fatal());
    assert_eq!(error.to_string(), "1:9: illegal character: \"@\"");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.starts_with("Unexpected character `@`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_source_is_kept() {
    let error = Error::new(
        ErrorImpl::StreamFault(io::Error::new(io::ErrorKind::Other, "boom")),
        Position::start(),
    );

    let source = std::error::Error::source(&error).unwrap();
    assert_eq!(source.to_string(), "error reading input stream: boom");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
