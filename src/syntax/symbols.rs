use std::collections::HashMap;
use super::{Identifier, Sort};

/// Built-in operator, with its documentary signature.
/// Signatures are informative only: arities are never checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Builtin {
	pub name: &'static str,
	pub signature: &'static str
}

const fn builtin(name: &'static str, signature: &'static str) -> Builtin {
	Builtin {
		name: name,
		signature: signature
	}
}

/// Built-in operators available in every script.
pub static BUILTINS: &[Builtin] = &[
	// arithmetic
	builtin("+", "(A A) A"),
	builtin("-", "(A A) A"),
	builtin("*", "(A A) A"),
	builtin("/", "(A A) A"),
	// comparisons
	builtin(">", "(A A) Bool"),
	builtin(">=", "(A A) Bool"),
	builtin("<", "(A A) Bool"),
	builtin("<=", "(A A) Bool"),
	builtin("=", "(A A) Bool"),
	// logic
	builtin("true", "Bool"),
	builtin("false", "Bool"),
	builtin("not", "(Bool Bool)"),
	builtin("=>", "(Bool Bool) Bool"),
	builtin("or", "(Bool Bool) Bool"),
	builtin("and", "(Bool Bool) Bool"),
	builtin("xor", "(Bool Bool) Bool"),
	builtin("ite", "(Bool A A) A")
];

/// Built-in sorts. This set is closed.
pub static SORTS: &[&str] = &["Bool", "Int", "Real"];

pub fn builtin_of(name: &str) -> Option<&'static Builtin> {
	BUILTINS.iter().find(|b| b.name == name)
}

/**
 * Per-script symbol table.
 *
 * Declared constants shadow built-in operators, and a redeclaration
 * overwrites the previous one.
 */
#[derive(Default)]
pub struct SymbolTable {
	declared: HashMap<String, Sort>
}

impl SymbolTable {
	pub fn new() -> SymbolTable {
		SymbolTable::default()
	}

	pub fn sort(&self, name: &str) -> Option<Sort> {
		SORTS.iter().find(|s| **s == name).map(|s| Sort::new(*s))
	}

	/// Declare a new constant.
	/// Returns the previous sort of the constant if it was already declared.
	pub fn declare(&mut self, name: &str, sort: Sort) -> Option<Sort> {
		self.declared.insert(name.to_string(), sort)
	}

	/// Sort of a declared constant.
	pub fn sort_of(&self, name: &str) -> Option<&Sort> {
		self.declared.get(name)
	}

	pub fn identifier(&self, name: &str) -> Option<Identifier> {
		if self.declared.contains_key(name) || builtin_of(name).is_some() {
			Some(Identifier::new(name))
		} else {
			None
		}
	}
}
