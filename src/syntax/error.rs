use std::io;
use std::result;
use source_span::Span;
use thiserror::Error;
use crate::Located;
use super::{Token, token::Kind};

/// Error raised while reading tokens.
#[derive(Debug, Error)]
pub enum LexError {
	#[error("io: {0}")]
	IO(#[from] io::Error),

	#[error("unexpected character: {0}")]
	UnexpectedChar(char),

	#[error("invalid number prefix: #{0}")]
	InvalidNumberPrefix(char),

	#[error("invalid decimal in strict mode: {0}")]
	StrictDecimal(String),

	#[error("unexpected end of file")]
	UnexpectedEof
}

impl LexError {
	pub fn at(self, span: Span) -> Located<LexError> {
		Located::new(self, span)
	}
}

/// Error raised while parsing a script.
#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Lexical(LexError),

	#[error("unexpected token: {0}")]
	UnexpectedToken(Token),

	#[error("expected `{0}', got {1}")]
	Expected(Kind, Token),

	#[error("unknown command: {0:?}")]
	UnknownCommand(String),

	#[error("undeclared sort: {0:?}")]
	UndeclaredSort(String),

	#[error("undeclared identifier: {0:?}")]
	UndeclaredIdentifier(String),

	#[error("undeclared identifier: {0:?}\n\tit looks like exponential notation, which is not SMT-LIB compliant\n\ttry turning off strict mode")]
	ExponentNotation(String),

	#[error("invalid literal {0}")]
	InvalidLiteral(Token)
}

impl Error {
	pub fn at(self, span: Span) -> Located<Error> {
		Located::new(self, span)
	}
}

impl From<Located<LexError>> for Located<Error> {
	fn from(e: Located<LexError>) -> Located<Error> {
		let span = e.span();
		Located::new(Error::Lexical(e.into_inner()), span)
	}
}

pub type Result<T> = result::Result<T, Located<Error>>;
