use std::fmt;
use crate::PList;

/**
 * Script: the list of commands of a specification file.
 */
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Command>
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Script {
        Script {
            commands: commands
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in self.commands.iter() {
            writeln!(f, "{}", command)?;
        }

        Ok(())
    }
}

/// Command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Declare a constant.
    DeclareConst {
        symbol: String,
        sort: Sort
    },

    /// Assertion.
    Assert(Term)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::DeclareConst { symbol, sort } => write!(f, "(declare-const {} {})", symbol, sort),
            Command::Assert(term) => write!(f, "(assert {})", term)
        }
    }
}

/// Sort.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sort {
    pub name: String
}

impl Sort {
    pub fn new<S: Into<String>>(name: S) -> Sort {
        Sort {
            name: name.into()
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/// Identifier, either declared or built-in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String
}

impl Identifier {
    pub fn new<S: Into<String>>(name: S) -> Identifier {
        Identifier {
            name: name.into()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/**
 * Literal constant.
 *
 * Hexadecimal and binary literals are integers, decimals are reals and
 * numerals are integers unless they do not fit in an `i64`.
 */
#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    Int(i64),
    Real(f64),
    String(String)
}

impl Constant {
    /// Numeric value of the constant, if any.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Constant::Int(i) => Some(*i as f64),
            Constant::Real(r) => Some(*r),
            Constant::String(_) => None
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(i) => write!(f, "{}", i),
            Constant::Real(r) => write!(f, "{:?}", r),
            Constant::String(s) => write!(f, "\"{}\"", s.replace('"', "\"\""))
        }
    }
}

/// Term.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Apply {
        function: Identifier,
        args: Vec<Term>
    },
    Const(Constant),
    Ident(Identifier)
}

impl Term {
    pub fn apply(function: Identifier, args: Vec<Term>) -> Term {
        Term::Apply {
            function: function,
            args: args
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Apply { function, args } => write!(f, "({} {})", function, PList(args)),
            Term::Const(c) => c.fmt(f),
            Term::Ident(id) => id.fmt(f)
        }
    }
}
