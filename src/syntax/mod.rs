/**
 * VNN-LIB syntax.
 */

use log::warn;
use source_span::{Position, Span};
use crate::Located;

pub mod error;
pub mod ast;
pub mod token;
pub mod lexer;
pub mod symbols;

pub use error::*;
pub use ast::*;
pub use token::Token;
pub use lexer::Lexer;
pub use symbols::SymbolTable;

use token::Kind;

/**
 * Read every token of the given text, including the final `Token::Eof`.
 */
pub fn tokenize(text: &str, strict: bool) -> lexer::Result<Vec<Located<Token>>> {
	Lexer::from_str(text, strict).collect()
}

/**
 * Parse a script from its text.
 */
pub fn parse(text: &str, strict: bool) -> Result<Script> {
	Parser::new(Lexer::from_str(text, strict))?.parse_script()
}

/**
 * Recursive descent parser with one token of lookahead.
 *
 * The parser owns the symbol table of the script: sorts, built-in operators and
 * declared constants. The first error aborts the parsing.
 */
pub struct Parser<L: Iterator<Item = lexer::Result<Located<Token>>>> {
	lexer: L,
	current: Located<Token>,
	symbols: SymbolTable
}

impl<L: Iterator<Item = lexer::Result<Located<Token>>>> Parser<L> {
	pub fn new(lexer: L) -> Result<Parser<L>> {
		let mut parser = Parser {
			lexer: lexer,
			current: Located::new(Token::Eof, Span::from(Position::new(0, 0))),
			symbols: SymbolTable::new()
		};

		parser.consume()?;
		Ok(parser)
	}

	pub fn symbols(&self) -> &SymbolTable {
		&self.symbols
	}

	/**
	 * Consume the current token and read the next one.
	 * Once the lexer is exhausted, the current token stays `Token::Eof`.
	 */
	fn consume(&mut self) -> Result<Located<Token>> {
		let next = match self.lexer.next() {
			Some(token) => token?,
			None => Located::new(Token::Eof, self.current.span())
		};

		Ok(std::mem::replace(&mut self.current, next))
	}

	/**
	 * Consume the current token and ensure it is of the given kind.
	 */
	fn consume_token(&mut self, kind: Kind) -> Result<Located<Token>> {
		if self.current.kind() == kind {
			self.consume()
		} else {
			Err(Error::Expected(kind, (*self.current).clone()).at(self.current.span()))
		}
	}

	fn unexpected<T>(&self, token: &Located<Token>) -> Result<T> {
		Err(Error::UnexpectedToken((**token).clone()).at(token.span()))
	}

	fn consume_symbol(&mut self) -> Result<Located<String>> {
		let token = self.consume()?;
		match token.as_ref() {
			Token::Symbol(name) => Ok(Located::new(name.clone(), token.span())),
			_ => self.unexpected(&token)
		}
	}

	fn lookup_identifier(&self, name: &str, span: Span) -> Result<Identifier> {
		match self.symbols.identifier(name) {
			Some(id) => Ok(id),
			None => {
				let exponent_like = name.len() >= 2
					&& name.starts_with('e')
					&& name[1..].chars().all(|c| c.is_ascii_digit() || c == '+' || c == '-');

				if exponent_like {
					Err(Error::ExponentNotation(name.to_string()).at(span))
				} else {
					Err(Error::UndeclaredIdentifier(name.to_string()).at(span))
				}
			}
		}
	}

	pub fn parse_script(mut self) -> Result<Script> {
		let mut commands = Vec::new();
		while !self.current.is_eof() {
			commands.push(self.parse_command()?);
		}

		Ok(Script::new(commands))
	}

	pub fn parse_command(&mut self) -> Result<Command> {
		self.consume_token(Kind::LParen)?;

		let token = self.consume()?;
		let command = match token.as_ref() {
			Token::Symbol(name) => {
				match name.as_str() {
					"assert" => self.parse_assert()?,
					"declare-const" => self.parse_declare_const()?,
					_ => return Err(Error::UnknownCommand(name.clone()).at(token.span()))
				}
			},
			_ => return self.unexpected(&token)
		};

		self.consume_token(Kind::RParen)?;
		Ok(command)
	}

	fn parse_declare_const(&mut self) -> Result<Command> {
		let symbol = self.consume_symbol()?;
		let sort_name = self.consume_symbol()?;

		let sort = match self.symbols.sort(&sort_name) {
			Some(sort) => sort,
			None => {
				let span = sort_name.span();
				return Err(Error::UndeclaredSort(sort_name.into_inner()).at(span))
			}
		};

		self.symbols.declare(&symbol, sort.clone());

		Ok(Command::DeclareConst {
			symbol: symbol.into_inner(),
			sort: sort
		})
	}

	fn parse_assert(&mut self) -> Result<Command> {
		Ok(Command::Assert(self.parse_term()?))
	}

	pub fn parse_term(&mut self) -> Result<Term> {
		let span = self.current.span();
		match self.current.kind() {
			Kind::Symbol => {
				let name = self.consume_symbol()?.into_inner();
				match name.strip_prefix('-') {
					Some(rest) => {
						warn!("literal negation `{}` does not strictly follow SMT-LIB", name);
						if rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
							if let Ok(value) = name.parse::<f64>() {
								return Ok(Term::Const(Constant::Real(value)))
							}
						}

						let minus = self.lookup_identifier("-", span)?;
						let id = self.lookup_identifier(rest, span)?;
						Ok(Term::apply(minus, vec![Term::Ident(id)]))
					},
					None => Ok(Term::Ident(self.lookup_identifier(&name, span)?))
				}
			},

			Kind::LParen => {
				self.consume()?;
				let head = self.consume_symbol()?;
				let function = self.lookup_identifier(&head, head.span())?;

				let mut args = vec![self.parse_term()?];
				while self.current.kind() != Kind::RParen {
					args.push(self.parse_term()?);
				}
				self.consume()?;

				Ok(Term::apply(function, args))
			},

			Kind::Numeral | Kind::Decimal | Kind::Hexadecimal | Kind::Binary | Kind::String => {
				let token = self.consume()?;
				Ok(Term::Const(literal(&token)?))
			},

			_ => {
				let token = self.consume()?;
				self.unexpected(&token)
			}
		}
	}
}

/**
 * Convert a literal token into its value.
 */
fn literal(token: &Located<Token>) -> Result<Constant> {
	let invalid = || Error::InvalidLiteral((**token).clone()).at(token.span());

	match token.as_ref() {
		Token::Numeral(text) => match text.parse::<i64>() {
			Ok(i) => Ok(Constant::Int(i)),
			Err(_) => text.parse::<f64>().map(Constant::Real).map_err(|_| invalid())
		},
		Token::Decimal(text) => text.parse::<f64>().map(Constant::Real).map_err(|_| invalid()),
		Token::Hexadecimal(text) => i64::from_str_radix(&text[2..], 16).map(Constant::Int).map_err(|_| invalid()),
		Token::Binary(text) => i64::from_str_radix(&text[2..], 2).map(Constant::Int).map_err(|_| invalid()),
		Token::String(text) => {
			let inner = &text[1..text.len()-1];
			Ok(Constant::String(inner.replace("\"\"", "\"")))
		},
		_ => Err(invalid())
	}
}
