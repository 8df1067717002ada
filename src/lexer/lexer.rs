use std::io::Read;

use tracing::{debug, trace, warn};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::{errors::errors::Error, Position, MK_TOKEN};

use super::{
    reader::RuneReader,
    tokens::{Token, TokenKind},
};

pub struct Lexer<R: Read> {
    reader: RuneReader<R>,
    pos: Position,
    drained: bool,
    exhausted: bool,
}

impl<R: Read> Lexer<R> {
    pub fn new(reader: R) -> Lexer<R> {
        Lexer {
            reader: RuneReader::new(reader),
            pos: Position::start(),
            drained: false,
            exhausted: false,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Scans one token. Once the stream is drained every call returns an
    /// `EOF` token at the final position.
    pub fn scan_next(&mut self) -> Result<Token, Error> {
        loop {
            let rune = match self.read()? {
                Some(rune) => rune,
                None => {
                    debug!(target: "uni::lexer", position = %self.pos, "Reached end of input");
                    return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.pos));
                }
            };

            if rune == '\n' {
                self.reset_position();
                continue;
            }

            if let Some(kind) = TokenKind::from_symbol(rune) {
                return Ok(self.emit(kind, String::from(kind.as_str()), self.pos));
            }

            if rune.is_whitespace() {
                continue;
            }

            if is_digit(rune) {
                let start = self.pos;
                self.backup(rune);
                let literal = self.lex_int()?;

                return Ok(self.emit(TokenKind::Integer, literal, start));
            }

            if is_letter(rune) {
                let start = self.pos;
                self.backup(rune);
                let literal = self.lex_var()?;

                return Ok(self.emit(TokenKind::Identifier, literal, start));
            }

            warn!(target: "uni::lexer", position = %self.pos, character = ?rune, "Illegal character");
            return Ok(self.emit(TokenKind::Illegal, rune.to_string(), self.pos));
        }
    }

    fn emit(&self, kind: TokenKind, value: String, position: Position) -> Token {
        trace!(target: "uni::lexer", %position, %kind, %value, "Scanned token");
        MK_TOKEN!(kind, value, position)
    }

    fn read(&mut self) -> Result<Option<char>, Error> {
        if self.drained {
            return Ok(None);
        }

        match self.reader.read_rune() {
            Ok(Some(rune)) => {
                self.pos.column += 1;
                Ok(Some(rune))
            }
            Ok(None) => {
                self.drained = true;
                Ok(None)
            }
            Err(err) => Err(Error::new(err, self.pos)),
        }
    }

    fn backup(&mut self, rune: char) {
        self.reader.unread_rune(rune);
        self.pos.column -= 1;
    }

    fn reset_position(&mut self) {
        self.pos.line += 1;
        self.pos.column = 0;
    }

    fn lex_int(&mut self) -> Result<String, Error> {
        self.lex_while(|rune| is_digit(rune) || rune == '.' || rune == ',')
    }

    fn lex_var(&mut self) -> Result<String, Error> {
        self.lex_while(|rune| {
            is_letter(rune) || is_digit(rune) || TokenKind::from_symbol(rune) == Some(TokenKind::Underscore)
        })
    }

    fn lex_while(&mut self, accept: impl Fn(char) -> bool) -> Result<String, Error> {
        let mut literal = String::new();

        while let Some(rune) = self.read()? {
            if accept(rune) {
                literal.push(rune);
            } else {
                self.backup(rune);
                break;
            }
        }

        Ok(literal)
    }
}

/// Decimal digits only (category Nd).
fn is_digit(rune: char) -> bool {
    rune.is_ascii_digit() || get_general_category(rune) == GeneralCategory::DecimalNumber
}

/// Letters only (categories Lu, Ll, Lt, Lm, Lo).
fn is_letter(rune: char) -> bool {
    rune.is_ascii_alphabetic()
        || matches!(
            get_general_category(rune),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token, Error>;

    /// Yields every token up to and including `EOF`, then `None`. A stream
    /// fault is yielded once and also ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let scanned = self.scan_next();
        if !matches!(&scanned, Ok(token) if !token.is_eof()) {
            self.exhausted = true;
        }

        Some(scanned)
    }
}

pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(reader).collect::<Result<Vec<Token>, Error>>()?;

    debug!(target: "uni::lexer", count = tokens.len(), "Tokenization complete");
    Ok(tokens)
}
