use std::io;
use std::result;
use thiserror::Error;
use crate::{Located, syntax, compile};
use crate::syntax::LexError;

/**
 * Any error raised while reading, parsing or compiling a specification.
 */
#[derive(Debug, Error)]
pub enum Error {
	#[error("{}: {}", .0.start(), .0)]
	Lexical(Located<LexError>),

	#[error("{}: {}", .0.start(), .0)]
	Syntax(Located<syntax::Error>),

	#[error(transparent)]
	Compile(#[from] compile::Error),

	#[error("io: {0}")]
	IO(#[from] io::Error)
}

impl Error {
	/// Checks if the error was raised by the lexer.
	pub fn is_lexical(&self) -> bool {
		match self {
			Error::Lexical(_) => true,
			_ => false
		}
	}
}

impl From<Located<LexError>> for Error {
	fn from(e: Located<LexError>) -> Error {
		Error::Lexical(e)
	}
}

impl From<Located<syntax::Error>> for Error {
	fn from(e: Located<syntax::Error>) -> Error {
		let span = e.span();
		match e.into_inner() {
			syntax::Error::Lexical(LexError::IO(e)) => Error::IO(e),
			syntax::Error::Lexical(e) => Error::Lexical(Located::new(e, span)),
			e => Error::Syntax(Located::new(e, span))
		}
	}
}

pub type Result<T> = result::Result<T, Error>;
