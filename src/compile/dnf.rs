use log::trace;
use super::Atom;

/// Conjunction of atoms. The position of an atom is its row number.
pub type Conjunction = Vec<Atom>;

/// Disjunction of conjunctions.
pub type Disjunction = Vec<Conjunction>;

/**
 * Disjunctive normal form of the asserted constraints.
 *
 * Rows asserted outside of any disjunction are shared by every branch. Each
 * disjunctive assertion multiplies the branches by its alternatives.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Branches {
    common: Conjunction,
    branches: Vec<Conjunction>
}

impl Default for Branches {
    fn default() -> Branches {
        Branches {
            common: Vec::new(),
            branches: vec![Vec::new()]
        }
    }
}

impl Branches {
    pub fn new() -> Branches {
        Branches::default()
    }

    /// Number of branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Rows shared by every branch.
    pub fn common(&self) -> &[Atom] {
        &self.common
    }

    /// Assert rows that hold unconditionally.
    pub fn assert_conjunction(&mut self, rows: Conjunction) {
        self.common.extend(rows)
    }

    /**
     * Assert a disjunction.
     *
     * Each alternative is combined with each existing branch. In a new branch,
     * the rows of the alternative come first, followed by the rows of the
     * existing branch.
     */
    pub fn assert_disjunction(&mut self, mut alternatives: Disjunction) {
        if alternatives.len() == 1 {
            if let Some(rows) = alternatives.pop() {
                self.assert_conjunction(rows)
            }
            return
        }

        let mut branches = Vec::with_capacity(alternatives.len() * self.branches.len());
        for alternative in alternatives.iter() {
            for branch in self.branches.iter() {
                let mut rows = alternative.clone();
                rows.extend(branch.iter().cloned());
                branches.push(rows)
            }
        }

        trace!("disjunction of {} alternatives: {} branches", alternatives.len(), branches.len());
        self.branches = branches
    }

    /**
     * Rows of each branch: the common rows followed by the rows of the branch.
     */
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Atom>> + '_ {
        self.branches.iter().map(move |branch| {
            self.common.iter().chain(branch.iter()).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{LinearForm, VariableKey};

    fn atom(i: usize) -> Atom {
        Atom::le(LinearForm::variable(VariableKey::Output(i)), &LinearForm::zero())
    }

    fn rows(branches: &Branches) -> Vec<Vec<Atom>> {
        branches.rows().map(|rows| rows.into_iter().cloned().collect()).collect()
    }

    #[test]
    fn conjunctions_are_common() {
        let mut branches = Branches::new();
        branches.assert_conjunction(vec![atom(0)]);
        branches.assert_disjunction(vec![vec![atom(1), atom(2)]]);
        assert_eq!(branches.len(), 1);
        assert_eq!(rows(&branches), vec![vec![atom(0), atom(1), atom(2)]]);
    }

    #[test]
    fn cross_product() {
        let mut branches = Branches::new();
        branches.assert_conjunction(vec![atom(0)]);
        branches.assert_disjunction(vec![vec![atom(1)], vec![atom(2)]]);
        branches.assert_disjunction(vec![vec![atom(3)], vec![atom(4), atom(5)]]);
        assert_eq!(branches.len(), 4);
        assert_eq!(rows(&branches), vec![
            vec![atom(0), atom(3), atom(1)],
            vec![atom(0), atom(3), atom(2)],
            vec![atom(0), atom(4), atom(5), atom(1)],
            vec![atom(0), atom(4), atom(5), atom(2)]
        ]);
    }
}
