//! Constraint compiler.
//!
//! Compiles a script into the disjunctive normal form of its assertions: a
//! list of input boxes, each paired with the output polytopes that may hold
//! for inputs in the box.

use std::collections::HashMap;
use std::mem;
use log::{debug, trace};
use crate::syntax::{Script, Identifier, Constant, Sort};
use crate::transform::{Transform, Transformer, Transformed};

mod error;
mod linear;
mod dnf;
mod output;

pub use error::*;
pub use linear::*;
pub use dnf::*;
pub use output::*;

/// Compiler configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prefix of the input variables, `X` for `X_0`, `X_1`, ...
    pub input_name: String,

    /// Prefix of the output variables.
    pub output_name: String,

    /// Size of the input vector, inferred from the declarations if `None`.
    pub input_size: Option<usize>,

    /// Size of the output vector, inferred from the declarations if `None`.
    pub output_size: Option<usize>
}

impl Default for Config {
    fn default() -> Config {
        Config::new("X", "Y")
    }
}

impl Config {
    pub fn new<I: Into<String>, O: Into<String>>(input_name: I, output_name: O) -> Config {
        Config {
            input_name: input_name.into(),
            output_name: output_name.into(),
            input_size: None,
            output_size: None
        }
    }

    pub fn with_input_size(mut self, size: usize) -> Config {
        self.input_size = Some(size);
        self
    }

    pub fn with_output_size(mut self, size: usize) -> Config {
        self.output_size = Some(size);
        self
    }
}

/// Compiled term.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Arithmetic expression.
    Expr(LinearForm),

    /// Comparison.
    Atom(Atom),

    Conjunction(Conjunction),

    Disjunction(Disjunction)
}

/// Index of the variable `<prefix>_<index>`.
fn index_of(name: &str, prefix: &str) -> Option<usize> {
    name.strip_prefix(prefix)?.strip_prefix('_')?.parse().ok()
}

/**
 * Constraint compiler.
 *
 * Assertions are compiled as they are visited and accumulated into DNF
 * branches. The branches are assembled into properties once the whole script
 * has been visited.
 */
pub struct Compiler {
    config: Config,
    input_size: usize,
    output_size: usize,

    /// Identifier of each variable that is neither an input nor an output.
    roles: HashMap<String, usize>,

    /// Names of those variables, by identifier.
    others: Vec<String>,

    branches: Branches
}

impl Compiler {
    pub fn new(config: Config) -> Compiler {
        Compiler {
            input_size: config.input_size.unwrap_or(0),
            output_size: config.output_size.unwrap_or(0),
            config: config,
            roles: HashMap::new(),
            others: Vec::new(),
            branches: Branches::new()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current size of the input vector.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Current size of the output vector.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    fn key_of(&mut self, name: &str) -> VariableKey {
        if let Some(i) = index_of(name, &self.config.input_name) {
            return VariableKey::Input(i)
        }

        if let Some(i) = index_of(name, &self.config.output_name) {
            return VariableKey::Output(i)
        }

        match self.roles.get(name) {
            Some(id) => VariableKey::Other(*id),
            None => {
                let id = self.others.len();
                self.roles.insert(name.to_string(), id);
                self.others.push(name.to_string());
                VariableKey::Other(id)
            }
        }
    }

    fn expressions(function: &str, args: Vec<Value>) -> Result<Vec<LinearForm>> {
        args.into_iter().map(|arg| match arg {
            Value::Expr(form) => Ok(form),
            _ => Err(Error::ExpectedExpression(function.to_string()))
        }).collect()
    }

    fn comparison(function: &str, args: Vec<Value>) -> Result<(LinearForm, LinearForm)> {
        let given = args.len();
        let mut forms = Self::expressions(function, args)?.into_iter();
        match (forms.next(), forms.next(), forms.next()) {
            (Some(lhs), Some(rhs), None) => Ok((lhs, rhs)),
            _ => Err(Error::Arity {
                function: function.to_string(),
                expected: 2,
                given: given
            })
        }
    }

    fn product(forms: Vec<LinearForm>) -> Result<LinearForm> {
        let mut factor = 1.0;
        let mut variable = None;
        for form in forms {
            if form.is_constant() {
                factor *= form.constant_term()
            } else if variable.is_none() {
                variable = Some(form)
            } else {
                return Err(Error::Nonlinear)
            }
        }

        Ok(match variable {
            Some(form) => form * factor,
            None => LinearForm::constant(factor)
        })
    }

    fn conjunction(args: Vec<Value>) -> Result<Conjunction> {
        let mut rows = Vec::new();
        for arg in args {
            match arg {
                Value::Atom(atom) => rows.push(atom),
                Value::Conjunction(conjunction) => rows.extend(conjunction),
                Value::Disjunction(mut alternatives) => {
                    match (alternatives.pop(), alternatives.is_empty()) {
                        (Some(alternative), true) => rows.extend(alternative),
                        _ => return Err(Error::UnsupportedNesting { inner: "or", outer: "and" })
                    }
                },
                Value::Expr(_) => return Err(Error::ExpectedConstraint("and".to_string()))
            }
        }

        Ok(rows)
    }

    fn disjunction(args: Vec<Value>) -> Result<Disjunction> {
        let mut alternatives = Vec::new();
        for arg in args {
            match arg {
                Value::Atom(atom) => alternatives.push(vec![atom]),
                Value::Conjunction(conjunction) => alternatives.push(conjunction),
                Value::Disjunction(disjunction) => alternatives.extend(disjunction),
                Value::Expr(_) => return Err(Error::ExpectedConstraint("or".to_string()))
            }
        }

        Ok(alternatives)
    }
}

impl Transformer for Compiler {
    type Term = Value;
    type Command = ();
    type Output = Vec<Property>;
    type Error = Error;

    fn transform_script(&mut self, _commands: Vec<()>) -> Result<Vec<Property>> {
        debug!("input size: {}, output size: {}", self.input_size, self.output_size);
        let branches = mem::take(&mut self.branches);
        debug!("{} common rows, {} branches", branches.common().len(), branches.len());

        let mut properties: Vec<Property> = Vec::new();
        for (i, rows) in branches.rows().enumerate() {
            match assemble(rows, self.input_size, self.output_size, &self.others)? {
                Some((input_box, polytope)) => {
                    match properties.iter_mut().find(|p| p.input_box == input_box) {
                        Some(property) => property.polytopes.push(polytope),
                        None => properties.push(Property {
                            input_box: input_box,
                            polytopes: vec![polytope]
                        })
                    }
                },
                None => debug!("branch {} is infeasible", i)
            }
        }

        debug!("{} properties", properties.len());
        Ok(properties)
    }

    fn transform_declare_const(&mut self, symbol: &str, sort: &Sort) -> Result<Transformed<()>> {
        trace!("declare-const {} {}", symbol, sort);
        match self.key_of(symbol) {
            VariableKey::Input(i) if self.config.input_size.is_none() => {
                self.input_size = self.input_size.max(i + 1)
            },
            VariableKey::Output(i) if self.config.output_size.is_none() => {
                self.output_size = self.output_size.max(i + 1)
            },
            _ => ()
        }

        Ok(Transformed::Discard)
    }

    fn transform_assert(&mut self, term: Value) -> Result<Transformed<()>> {
        match term {
            Value::Atom(atom) => {
                trace!("assert {}", atom);
                self.branches.assert_conjunction(vec![atom])
            },
            Value::Conjunction(rows) => {
                trace!("assert conjunction of {} rows", rows.len());
                self.branches.assert_conjunction(rows)
            },
            Value::Disjunction(alternatives) => {
                trace!("assert disjunction of {} alternatives", alternatives.len());
                self.branches.assert_disjunction(alternatives)
            },
            Value::Expr(_) => return Err(Error::NotAConstraint)
        }

        Ok(Transformed::Discard)
    }

    fn transform_apply(&mut self, function: &Identifier, args: Vec<Value>) -> Result<Value> {
        let name = function.as_str();
        match name {
            "+" => {
                let sum = Self::expressions(name, args)?.iter().fold(LinearForm::zero(), |sum, form| sum + form);
                Ok(Value::Expr(sum))
            },
            "-" => {
                let mut forms = Self::expressions(name, args)?.into_iter();
                let first = forms.next().unwrap_or_default();
                let rest: Vec<_> = forms.collect();
                if rest.is_empty() {
                    Ok(Value::Expr(-first))
                } else {
                    Ok(Value::Expr(rest.iter().fold(first, |diff, form| diff - form)))
                }
            },
            "*" => Ok(Value::Expr(Self::product(Self::expressions(name, args)?)?)),
            "<=" => {
                let (lhs, rhs) = Self::comparison(name, args)?;
                Ok(Value::Atom(Atom::le(lhs, &rhs)))
            },
            ">=" => {
                let (lhs, rhs) = Self::comparison(name, args)?;
                Ok(Value::Atom(Atom::ge(&lhs, rhs)))
            },
            "and" => Ok(Value::Conjunction(Self::conjunction(args)?)),
            "or" => Ok(Value::Disjunction(Self::disjunction(args)?)),
            _ => Err(Error::UnsupportedFunction(name.to_string()))
        }
    }

    fn transform_constant(&mut self, value: &Constant) -> Result<Value> {
        match value {
            Constant::String(s) => Err(Error::StringConstant(s.clone())),
            c => Ok(Value::Expr(LinearForm::constant(c.as_real().unwrap_or(0.0))))
        }
    }

    fn transform_identifier(&mut self, id: &Identifier) -> Result<Value> {
        Ok(Value::Expr(LinearForm::variable(self.key_of(id.as_str()))))
    }
}

/**
 * Compile a script into its list of properties.
 */
pub fn compile(script: &Script, config: Config) -> Result<Vec<Property>> {
    script.transform(&mut Compiler::new(config))
}
