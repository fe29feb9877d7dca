use std::fmt;

/**
 * Token.
 *
 * Literal tokens keep the exact text they were read from, so that the parser
 * can choose how to convert them.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
	/**
	 * End of file token.
	 */
	Eof,

	/**
	 * Opening parenthesis.
	 */
	LParen,

	/**
	 * Closing parenthesis.
	 */
	RParen,

	/**
	 * Simple or quoted symbol.
	 * The bars of a quoted symbol are not part of the text.
	 */
	Symbol(String),

	Numeral(String),

	/**
	 * Decimal, possibly with an exponent in the non-strict dialect.
	 */
	Decimal(String),

	/**
	 * Hexadecimal literal, including its `#x` prefix.
	 */
	Hexadecimal(String),

	/**
	 * Binary literal, including its `#b` prefix.
	 */
	Binary(String),

	/**
	 * String literal, including the surrounding quotes and with `""` escapes
	 * left untouched.
	 */
	String(String)
}

/// Token kind, without the token text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
	Eof,
	LParen,
	RParen,
	Symbol,
	Numeral,
	Decimal,
	Hexadecimal,
	Binary,
	String
}

impl Token {
	pub fn kind(&self) -> Kind {
		match self {
			Token::Eof => Kind::Eof,
			Token::LParen => Kind::LParen,
			Token::RParen => Kind::RParen,
			Token::Symbol(_) => Kind::Symbol,
			Token::Numeral(_) => Kind::Numeral,
			Token::Decimal(_) => Kind::Decimal,
			Token::Hexadecimal(_) => Kind::Hexadecimal,
			Token::Binary(_) => Kind::Binary,
			Token::String(_) => Kind::String
		}
	}

	/// Literal text of the token.
	pub fn text(&self) -> &str {
		match self {
			Token::Eof => "",
			Token::LParen => "(",
			Token::RParen => ")",
			Token::Symbol(t) | Token::Numeral(t) | Token::Decimal(t) | Token::Hexadecimal(t) | Token::Binary(t) | Token::String(t) => t.as_str()
		}
	}

	pub fn is_eof(&self) -> bool {
		*self == Token::Eof
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Token::Eof => write!(f, "<end of file>"),
			Token::Symbol(s) => write!(f, "SYMBOL({:?})", s),
			Token::Numeral(s) => write!(f, "NUMERAL({:?})", s),
			Token::Decimal(s) => write!(f, "DECIMAL({:?})", s),
			Token::Hexadecimal(s) => write!(f, "HEXADECIMAL({:?})", s),
			Token::Binary(s) => write!(f, "BINARY({:?})", s),
			Token::String(s) => write!(f, "STRING({:?})", s),
			t => write!(f, "{}", t.text())
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use self::Kind::*;
		match self {
			Eof => write!(f, "<end of file>"),
			LParen => write!(f, "("),
			RParen => write!(f, ")"),
			Symbol => write!(f, "SYMBOL"),
			Numeral => write!(f, "NUMERAL"),
			Decimal => write!(f, "DECIMAL"),
			Hexadecimal => write!(f, "HEXADECIMAL"),
			Binary => write!(f, "BINARY"),
			String => write!(f, "STRING")
		}
	}
}
