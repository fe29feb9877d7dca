use std::collections::BTreeMap;
use std::ops::{Add, Sub, Neg, Mul};
use std::fmt;

/**
 * Role of a variable in a linear form.
 *
 * `Other` variables are neither inputs nor outputs of the network. They are
 * identified by their declaration order and must cancel out before the
 * constraints are assembled.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariableKey {
    Const,
    Input(usize),
    Output(usize),
    Other(usize)
}

impl fmt::Display for VariableKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VariableKey::Const => write!(f, "1"),
            VariableKey::Input(i) => write!(f, "x{}", i),
            VariableKey::Output(i) => write!(f, "y{}", i),
            VariableKey::Other(i) => write!(f, "v{}", i)
        }
    }
}

/**
 * Linear combination of variables, plus a constant stored under
 * `VariableKey::Const`.
 *
 * Null coefficients are never stored, so a variable that cancels out is
 * absent from the form.
 */
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinearForm {
    coefficients: BTreeMap<VariableKey, f64>
}

impl LinearForm {
    pub fn zero() -> LinearForm {
        LinearForm::default()
    }

    pub fn constant(value: f64) -> LinearForm {
        let mut form = LinearForm::zero();
        form.add_term(VariableKey::Const, value);
        form
    }

    pub fn variable(key: VariableKey) -> LinearForm {
        let mut form = LinearForm::zero();
        form.add_term(key, 1.0);
        form
    }

    /// Add `value * key` to the form.
    pub fn add_term(&mut self, key: VariableKey, value: f64) {
        let c = self.coefficients.entry(key).or_insert(0.0);
        *c += value;
        if *c == 0.0 {
            self.coefficients.remove(&key);
        }
    }

    pub fn coefficient(&self, key: VariableKey) -> f64 {
        self.coefficients.get(&key).cloned().unwrap_or(0.0)
    }

    pub fn constant_term(&self) -> f64 {
        self.coefficient(VariableKey::Const)
    }

    /// Checks that the form has no variable.
    pub fn is_constant(&self) -> bool {
        self.variables().next().is_none()
    }

    /// Variables of the form with their coefficient, in key order.
    pub fn variables(&self) -> impl Iterator<Item = (VariableKey, f64)> + '_ {
        self.coefficients.iter()
            .filter(|(key, _)| **key != VariableKey::Const)
            .map(|(key, c)| (*key, *c))
    }
}

impl<'a> Add<&'a LinearForm> for LinearForm {
    type Output = LinearForm;

    fn add(mut self, other: &'a LinearForm) -> LinearForm {
        for (key, c) in other.coefficients.iter() {
            self.add_term(*key, *c)
        }

        self
    }
}

impl<'a> Sub<&'a LinearForm> for LinearForm {
    type Output = LinearForm;

    fn sub(mut self, other: &'a LinearForm) -> LinearForm {
        for (key, c) in other.coefficients.iter() {
            self.add_term(*key, -*c)
        }

        self
    }
}

impl Neg for LinearForm {
    type Output = LinearForm;

    fn neg(mut self) -> LinearForm {
        for c in self.coefficients.values_mut() {
            *c = -*c;
        }

        self
    }
}

impl Mul<f64> for LinearForm {
    type Output = LinearForm;

    fn mul(self, factor: f64) -> LinearForm {
        if factor == 0.0 {
            return LinearForm::zero()
        }

        LinearForm {
            coefficients: self.coefficients.into_iter().map(|(key, c)| (key, c * factor)).collect()
        }
    }
}

impl fmt::Display for LinearForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0")
        }

        for (i, (key, c)) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }

            match key {
                VariableKey::Const => write!(f, "{}", c)?,
                key => write!(f, "{}*{}", c, key)?
            }
        }

        Ok(())
    }
}

/**
 * Linear constraint `form <= 0`.
 *
 * The constant of the form is the opposite of the right-hand side of the
 * constraint.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Atom(LinearForm);

impl Atom {
    /// `lhs <= rhs`
    pub fn le(lhs: LinearForm, rhs: &LinearForm) -> Atom {
        Atom(lhs - rhs)
    }

    /// `lhs >= rhs`
    pub fn ge(lhs: &LinearForm, rhs: LinearForm) -> Atom {
        Atom(rhs - lhs)
    }

    pub fn form(&self) -> &LinearForm {
        &self.0
    }

    /// Right-hand side of the constraint once the variables are on the left.
    pub fn rhs(&self) -> f64 {
        let k = self.0.constant_term();
        if k == 0.0 { 0.0 } else { -k }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <= 0", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VariableKey::*;

    #[test]
    fn cancellation() {
        let x = LinearForm::variable(Other(0));
        let form = x.clone() - &x;
        assert_eq!(form, LinearForm::zero());
        assert!(form.is_constant());

        let form = LinearForm::variable(Input(0)) * 0.0;
        assert!(form.is_constant());
    }

    #[test]
    fn arithmetic() {
        let form = (LinearForm::variable(Output(0)) + &LinearForm::constant(2.0)) * 3.0;
        let form = -(form - &LinearForm::variable(Output(1)));
        assert_eq!(form.coefficient(Output(0)), -3.0);
        assert_eq!(form.coefficient(Output(1)), 1.0);
        assert_eq!(form.constant_term(), -6.0);
        assert_eq!(form.variables().collect::<Vec<_>>(), vec![(Output(0), -3.0), (Output(1), 1.0)]);
    }

    #[test]
    fn atoms() {
        // y0 >= 0.5
        let atom = Atom::ge(&LinearForm::variable(Output(0)), LinearForm::constant(0.5));
        assert_eq!(atom.form().coefficient(Output(0)), -1.0);
        assert_eq!(atom.rhs(), -0.5);

        // x0 <= 1
        let atom = Atom::le(LinearForm::variable(Input(0)), &LinearForm::constant(1.0));
        assert_eq!(atom.form().coefficient(Input(0)), 1.0);
        assert_eq!(atom.rhs(), 1.0);
    }
}
