//! Syntax tree transformations.
//!
//! A [`Transformer`] gives one handler per node kind. Walking a node first
//! transforms its children, left to right, then hands their results to the
//! handler of the node. This lets several compilers share the same syntax tree.

use crate::syntax::{Script, Command, Term, Identifier, Constant, Sort};

/// Result of a command handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Transformed<T> {
    Keep(T),

    /// The command result is left out of the list given to
    /// [`Transformer::transform_script`].
    Discard
}

impl<T> Transformed<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Transformed::Keep(t) => Some(t),
            Transformed::Discard => None
        }
    }
}

/// Syntax tree transformer.
pub trait Transformer {
    /// Result of a term transformation.
    type Term;

    /// Result of a command transformation.
    type Command;

    /// Result of the script transformation.
    type Output;

    type Error;

    fn transform_script(&mut self, commands: Vec<Self::Command>) -> Result<Self::Output, Self::Error>;

    /// Constant declaration.
    /// By default declarations are discarded.
    fn transform_declare_const(&mut self, _symbol: &str, _sort: &Sort) -> Result<Transformed<Self::Command>, Self::Error> {
        Ok(Transformed::Discard)
    }

    fn transform_assert(&mut self, term: Self::Term) -> Result<Transformed<Self::Command>, Self::Error>;

    fn transform_apply(&mut self, function: &Identifier, args: Vec<Self::Term>) -> Result<Self::Term, Self::Error>;

    fn transform_constant(&mut self, value: &Constant) -> Result<Self::Term, Self::Error>;

    fn transform_identifier(&mut self, id: &Identifier) -> Result<Self::Term, Self::Error>;
}

/// Syntax tree node that can be walked by a transformer.
pub trait Transform<T: Transformer> {
    type Output;

    fn transform(&self, transformer: &mut T) -> Result<Self::Output, T::Error>;
}

impl<T: Transformer> Transform<T> for Script {
    type Output = T::Output;

    fn transform(&self, transformer: &mut T) -> Result<T::Output, T::Error> {
        let mut results = Vec::with_capacity(self.commands.len());
        for command in self.commands.iter() {
            if let Transformed::Keep(result) = command.transform(transformer)? {
                results.push(result)
            }
        }

        transformer.transform_script(results)
    }
}

impl<T: Transformer> Transform<T> for Command {
    type Output = Transformed<T::Command>;

    fn transform(&self, transformer: &mut T) -> Result<Transformed<T::Command>, T::Error> {
        match self {
            Command::DeclareConst { symbol, sort } => transformer.transform_declare_const(symbol, sort),
            Command::Assert(term) => {
                let term = term.transform(transformer)?;
                transformer.transform_assert(term)
            }
        }
    }
}

impl<T: Transformer> Transform<T> for Term {
    type Output = T::Term;

    fn transform(&self, transformer: &mut T) -> Result<T::Term, T::Error> {
        match self {
            Term::Apply { function, args } => {
                let mut transformed_args = Vec::with_capacity(args.len());
                for arg in args.iter() {
                    transformed_args.push(arg.transform(transformer)?)
                }

                transformer.transform_apply(function, transformed_args)
            },
            Term::Const(c) => transformer.transform_constant(c),
            Term::Ident(id) => transformer.transform_identifier(id)
        }
    }
}
