#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};
use super::{Atom, VariableKey, Error, Result};

/// Closed interval of values of an input variable.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Interval {
        Interval {
            low: low,
            high: high
        }
    }

    /// Interval with no bound.
    pub fn unbounded() -> Interval {
        Interval::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

/// Bounds on every input variable.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct InputBox {
    pub intervals: Vec<Interval>
}

impl InputBox {
    /// Unbounded box of the given dimension.
    pub fn new(size: usize) -> InputBox {
        InputBox {
            intervals: vec![Interval::unbounded(); size]
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Apply the constraint `c * x_i + k <= 0`.
    fn bound(&mut self, i: usize, c: f64, k: f64) -> Result<()> {
        let size = self.intervals.len();
        let interval = self.intervals.get_mut(i).ok_or(Error::IndexOutOfRange { index: i, size: size })?;
        let value = if k == 0.0 { 0.0 } else { -k / c };
        if c > 0.0 {
            interval.high = interval.high.min(value)
        } else {
            interval.low = interval.low.max(value)
        }

        Ok(())
    }
}

/**
 * Conjunction of linear constraints `matrix * y <= rhs` over the output
 * vector `y`.
 */
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polytope {
    pub matrix: Vec<Vec<f64>>,
    pub rhs: Vec<f64>
}

impl Polytope {
    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Rows of the polytope with their right-hand side.
    pub fn rows(&self) -> impl Iterator<Item = (&[f64], f64)> {
        self.matrix.iter().map(Vec::as_slice).zip(self.rhs.iter().cloned())
    }

    fn push(&mut self, row: Vec<f64>, rhs: f64) {
        self.matrix.push(row);
        self.rhs.push(rhs)
    }
}

/**
 * Compiled property: for inputs in the box, the outputs must lie in one of
 * the polytopes.
 */
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub input_box: InputBox,
    pub polytopes: Vec<Polytope>
}

/**
 * Assemble the rows of one branch into its box and polytope.
 *
 * Rows bounding a single input tighten the box, rows over outputs become rows
 * of the polytope, in order. Rows without variables are either always true,
 * in which case they are ignored, or never true, in which case the branch is
 * infeasible and `None` is returned. Every row is checked even in an
 * infeasible branch.
 *
 * `others` gives the name of each `VariableKey::Other` variable.
 */
pub fn assemble<'a, I: IntoIterator<Item = &'a Atom>>(rows: I, input_size: usize, output_size: usize, others: &[String]) -> Result<Option<(InputBox, Polytope)>> {
    let mut input_box = InputBox::new(input_size);
    let mut polytope = Polytope::default();
    let mut feasible = true;

    for atom in rows {
        let form = atom.form();
        let mut inputs = Vec::new();
        let mut outputs = Vec::new();

        for (key, c) in form.variables() {
            match key {
                VariableKey::Input(i) => inputs.push((i, c)),
                VariableKey::Output(i) => outputs.push((i, c)),
                VariableKey::Other(id) => {
                    let name = others.get(id).cloned().unwrap_or_else(|| key.to_string());
                    return Err(Error::UnexpectedVariable(name))
                },
                VariableKey::Const => ()
            }
        }

        match (inputs.len(), outputs.len()) {
            (0, 0) => {
                if form.constant_term() > 0.0 {
                    feasible = false
                }
            },
            (1, 0) => {
                let (i, c) = inputs[0];
                input_box.bound(i, c, form.constant_term())?
            },
            (0, _) => {
                let mut row = vec![0.0; output_size];
                for (i, c) in outputs {
                    match row.get_mut(i) {
                        Some(r) => *r = c,
                        None => return Err(Error::IndexOutOfRange { index: i, size: output_size })
                    }
                }

                polytope.push(row, atom.rhs())
            },
            (_, 0) => return Err(Error::MultipleInputs(atom.to_string())),
            _ => return Err(Error::MixedConstraint(atom.to_string()))
        }
    }

    Ok(if feasible { Some((input_box, polytope)) } else { None })
}
