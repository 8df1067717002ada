use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::ALL.iter().filter(|kind| kind.is_symbol()) {
            if let Some(symbol) = kind.as_str().chars().next() {
                map.insert(symbol, *kind);
            }
        }
        map
    };
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Integer,

    Semicolon, // ;

    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /

    Assignment, // =
    Bang,       // !
    Question,   // ?
    Dot,        // .
    Comma,      // ,
    Underscore, // _

    OpenParen,    // (
    CloseParen,   // )
    OpenCurly,    // {
    CloseCurly,   // }
    OpenBracket,  // [
    CloseBracket, // ]
    OpenAngle,    // <
    CloseAngle,   // >

    DoubleQuote, // "
    SingleQuote, // '
}

impl TokenKind {
    pub const ALL: [TokenKind; 25] = [
        TokenKind::EOF,
        TokenKind::Illegal,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Semicolon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Assignment,
        TokenKind::Bang,
        TokenKind::Question,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Underscore,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenAngle,
        TokenKind::CloseAngle,
        TokenKind::DoubleQuote,
        TokenKind::SingleQuote,
    ];

    /// Canonical text of the kind: the symbol itself for fixed-symbol kinds,
    /// a display name for the others.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "VAR",
            TokenKind::Integer => "INT",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assignment => "=",
            TokenKind::Bang => "!",
            TokenKind::Question => "?",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Underscore => "_",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenAngle => "<",
            TokenKind::CloseAngle => ">",
            TokenKind::DoubleQuote => "\"",
            TokenKind::SingleQuote => "'",
        }
    }

    pub fn is_symbol(&self) -> bool {
        !matches!(
            self,
            TokenKind::EOF | TokenKind::Illegal | TokenKind::Identifier | TokenKind::Integer
        )
    }

    pub fn from_symbol(symbol: char) -> Option<TokenKind> {
        SYMBOL_LOOKUP.get(&symbol).copied()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.position, self.kind, self.value)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
