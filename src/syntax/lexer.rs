use std::io;
use std::iter::Peekable;
use std::str::Chars;
use source_span::{Position, Span};
use crate::Located;
use super::{Token, LexError};

pub type Result<T> = std::result::Result<T, Located<LexError>>;

/// Character source over an in-memory string.
pub type StrSource<'a> = std::iter::Map<Chars<'a>, fn(char) -> io::Result<char>>;

/**
 * Lexer.
 *
 * Reads tokens lazily from a stream of characters, skipping whitespaces and
 * comments. The stream ends with a single `Token::Eof`, after which the lexer
 * yields nothing. The first error also ends the stream.
 */
pub struct Lexer<R: Iterator<Item=io::Result<char>>> {
	decoder: Peekable<R>,
	strict: bool,
	location: Span,
	finished: bool
}

fn is_whitespace(c: char) -> bool {
	c == '\t' || c == '\n' || c == '\r' || c == ' '
}

fn is_symbol_char(c: char) -> bool {
	c.is_ascii_alphabetic() || "~!@$%^&*+=<>.?/_-".contains(c)
}

impl<'a> Lexer<StrSource<'a>> {
	/// Create a lexer reading the given text.
	pub fn from_str(text: &'a str, strict: bool) -> Lexer<StrSource<'a>> {
		Lexer::new(text.chars().map(Ok as fn(char) -> io::Result<char>), strict)
	}
}

impl<R: Iterator<Item = io::Result<char>>> Lexer<R> {
	/**
	 * Create a new lexer.
	 * In strict mode, decimals with an exponent are rejected.
	 */
	pub fn new(source: R, strict: bool) -> Lexer<R> {
		Lexer {
			decoder: source.peekable(),
			strict: strict,
			location: Position::new(0, 0).into(),
			finished: false
		}
	}

	pub fn is_strict(&self) -> bool {
		self.strict
	}

	/// Location of the token being read.
	pub fn location(&self) -> Span {
		self.location
	}

	fn error(&self, e: LexError) -> Located<LexError> {
		e.at(self.location)
	}

	fn peek_char(&mut self) -> Result<Option<char>> {
		match self.decoder.peek() {
			Some(Ok(c)) => Ok(Some(*c)),
			Some(Err(_)) => {
				Ok(Some(self.consume()?)) // this will always fail.
			},
			None => Ok(None)
		}
	}

	fn consume(&mut self) -> Result<char> {
		match self.decoder.next() {
			Some(Ok(c)) => {
				self.location.push(c);
				Ok(c)
			},
			Some(Err(e)) => Err(self.error(LexError::IO(e))),
			None => Err(self.error(LexError::UnexpectedEof))
		}
	}

	/// Consume characters while they satisfy the predicate.
	fn consume_while<P: Fn(char) -> bool>(&mut self, text: &mut String, predicate: P) -> Result<()> {
		loop {
			match self.peek_char()? {
				Some(c) if predicate(c) => text.push(self.consume()?),
				_ => break
			}
		}

		Ok(())
	}

	fn skip_whitespaces(&mut self) -> Result<()> {
		loop {
			match self.peek_char()? {
				Some(';') => self.skip_line()?,
				Some(c) if is_whitespace(c) => {
					self.consume()?;
				},
				_ => break
			}
		}

		Ok(())
	}

	/**
	 * Skip all chars until the next line break.
	 * A comment may end the file.
	 */
	fn skip_line(&mut self) -> Result<()> {
		loop {
			match self.peek_char()? {
				Some('\n') | Some('\r') | None => break,
				_ => {
					self.consume()?;
				}
			}
		}

		Ok(())
	}

	fn read_symbol(&mut self) -> Result<Token> {
		let mut name = String::new();
		self.consume_while(&mut name, |c| is_symbol_char(c) || c.is_ascii_digit())?;
		Ok(Token::Symbol(name))
	}

	fn read_quoted_symbol(&mut self) -> Result<Token> {
		self.consume()?; // opening `|`
		let mut name = String::new();
		loop {
			match self.consume()? {
				'|' => break,
				c => name.push(c)
			}
		}

		Ok(Token::Symbol(name))
	}

	fn read_string(&mut self) -> Result<Token> {
		let mut string = String::new();
		string.push(self.consume()?);

		loop {
			let c = self.consume()?;
			string.push(c);
			if c == '"' {
				// `""` is an escaped quote.
				if self.peek_char()? == Some('"') {
					string.push(self.consume()?);
				} else {
					break
				}
			}
		}

		Ok(Token::String(string))
	}

	fn read_exponent(&mut self, number: &mut String) -> Result<()> {
		number.push(self.consume()?);
		if self.strict {
			return Err(self.error(LexError::StrictDecimal(number.clone())))
		}

		match self.peek_char()? {
			Some(c) if c == '+' || c == '-' => number.push(self.consume()?),
			Some(_) => (),
			None => return Err(self.error(LexError::UnexpectedEof))
		}

		if self.peek_char()?.is_none() {
			return Err(self.error(LexError::UnexpectedEof))
		}

		self.consume_while(number, |c| c.is_ascii_digit())
	}

	/// Numerals other than `0` never start with a `0`: `007` is read as three
	/// numerals.
	fn read_number(&mut self) -> Result<Token> {
		let mut number = String::new();
		let first = self.consume()?;
		number.push(first);
		if first != '0' {
			self.consume_while(&mut number, |c| c.is_ascii_digit())?;
		}

		match self.peek_char()? {
			Some('.') => {
				number.push(self.consume()?);
				if self.peek_char()?.is_none() {
					return Err(self.error(LexError::UnexpectedEof))
				}

				self.consume_while(&mut number, |c| c.is_ascii_digit())?;
				if let Some('e') | Some('E') = self.peek_char()? {
					self.read_exponent(&mut number)?;
				}

				Ok(Token::Decimal(number))
			},
			Some('e') | Some('E') => {
				self.read_exponent(&mut number)?;
				Ok(Token::Decimal(number))
			},
			_ => Ok(Token::Numeral(number))
		}
	}

	fn read_prefixed_number(&mut self) -> Result<Token> {
		let mut number = String::new();
		number.push(self.consume()?); // `#`

		match self.consume()? {
			'x' => {
				number.push('x');
				self.consume_while(&mut number, |c| c.is_ascii_hexdigit())?;
				Ok(Token::Hexadecimal(number))
			},
			'b' => {
				number.push('b');
				self.consume_while(&mut number, |c| c == '0' || c == '1')?;
				Ok(Token::Binary(number))
			},
			c => Err(self.error(LexError::InvalidNumberPrefix(c)))
		}
	}

	fn read_token(&mut self) -> Result<Option<Located<Token>>> {
		self.skip_whitespaces()?;
		self.location.clear();

		let token = match self.peek_char()? {
			Some(c) => {
				match c {
					'(' => {
						self.consume()?;
						Token::LParen
					},

					')' => {
						self.consume()?;
						Token::RParen
					},

					'"' => self.read_string()?,

					'|' => self.read_quoted_symbol()?,

					'#' => self.read_prefixed_number()?,

					c if c.is_ascii_digit() => self.read_number()?,

					c if is_symbol_char(c) => self.read_symbol()?,

					c => {
						self.consume()?;
						return Err(self.error(LexError::UnexpectedChar(c)))
					}
				}
			},
			None => {
				if self.finished {
					return Ok(None)
				}

				self.finished = true;
				return Ok(Some(Located::new(Token::Eof, self.location)))
			}
		};

		Ok(Some(Located::new(token, self.location)))
	}
}

impl<R: Iterator<Item = io::Result<char>>> Iterator for Lexer<R> {
	type Item = Result<Located<Token>>;

	fn next(&mut self) -> Option<Result<Located<Token>>> {
		if self.finished {
			return None
		}

		let token = self.read_token();
		if token.is_err() {
			self.finished = true;
		}

		token.transpose()
	}
}
