//! Boolean 2-satisfiability through the implication graph.
//!
//! A 2-CNF formula is a conjunction of clauses `(a ∨ b)` over signed literals: `i`
//! stands for variable `xi` and `-i` for its negation `¬xi`. Variables are numbered
//! from 1 and the variable count is the largest literal magnitude.
//!
//! # Reduction
//!
//! Every literal becomes a vertex of a directed graph: variable `i` owns vertex
//! `2(i-1)` for `xi` and vertex `2(i-1)+1` for `¬xi`. A clause `(a ∨ b)` is equivalent
//! to the implications `¬a → b` and `¬b → a`, which become edges.
//!
//! The formula is unsatisfiable iff some `xi` and `¬xi` share a strongly connected
//! component. Otherwise, with components numbered in the order Tarjan's algorithm
//! closes them, setting `xi` true iff its component closes before the one of `¬xi`
//! satisfies every clause.
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::twosat::is_2satisfiable;
//!
//! // (x1 ∨ ¬x2) ∧ (¬x1 ∨ x2) ∧ (¬x1 ∨ ¬x2) ∧ (x1 ∨ ¬x3)
//! let clauses = [(1, -2), (-1, 2), (-1, -2), (1, -3)];
//! let assignment = is_2satisfiable(&clauses)?.expect("formula is satisfiable");
//! assert!(assignment.satisfies(&clauses));
//!
//! // Every combination of x1 and x2 is excluded
//! let contradiction = [(1, 2), (-1, 2), (1, -2), (-1, -2)];
//! assert!(is_2satisfiable(&contradiction)?.is_none());
//! # Ok::<(), graphwalk::Error>(())
//! ```

use crate::{
    graph::{
        algorithms::strongly_connected_components, AdjacencyList, Graph, GraphBase, VertexId,
    },
    Error, GraphConfig, Result,
};

/// Largest variable number a literal may name.
///
/// Each variable costs two vertices in the implication graph, sparse numbering
/// included.
pub const MAX_VARIABLES: usize = 1 << 24;

/// A validated 2-CNF formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoSat {
    clauses: Vec<(i64, i64)>,
    variables: usize,
}

impl TwoSat {
    /// Creates a formula from its clauses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if a literal is zero or names a variable
    /// above [`MAX_VARIABLES`].
    pub fn new(clauses: &[(i64, i64)]) -> Result<Self> {
        let mut variables = 0;
        for &(a, b) in clauses {
            variables = variables.max(variable_of(a)?).max(variable_of(b)?);
        }

        Ok(TwoSat {
            clauses: clauses.to_vec(),
            variables,
        })
    }

    /// Returns the number of variables, the largest literal magnitude.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Returns the clauses of the formula.
    #[must_use]
    pub fn clauses(&self) -> &[(i64, i64)] {
        &self.clauses
    }

    /// Builds the implication graph of the formula.
    ///
    /// Vertex labels are `x1`, `¬x1`, `x2`, `¬x2`, and so on. Edge labels name the
    /// clause the implication came from.
    ///
    /// # Errors
    ///
    /// Cannot fail for a formula built through [`TwoSat::new`]; literal conversion is
    /// still checked and reported as [`Error::InvalidLiteral`].
    pub fn implication_graph(&self) -> Result<AdjacencyList> {
        let mut graph = AdjacencyList::with_config(GraphConfig::directed());
        for variable in 1..=self.variables {
            graph.add_vertex(format!("x{variable}"));
            graph.add_vertex(format!("¬x{variable}"));
        }

        for (clause, &(a, b)) in self.clauses.iter().enumerate() {
            let a = literal_vertex(a)?;
            let b = literal_vertex(b)?;
            let label = format!("c{clause}");
            graph.add_labeled_edge(negate(a), b, label.clone())?;
            graph.add_labeled_edge(negate(b), a, label)?;
        }

        Ok(graph)
    }

    /// Finds a satisfying assignment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsatisfiable`] if a variable and its negation fall into the
    /// same strongly connected component of the implication graph.
    pub fn solve(&self) -> Result<Assignment> {
        let graph = self.implication_graph()?;
        let sccs = strongly_connected_components(&graph)?;

        let mut closed = vec![0; graph.vertex_count()];
        for (position, scc) in sccs.iter().enumerate() {
            for vertex in scc {
                closed[vertex.index()] = position;
            }
        }

        let mut values = Vec::with_capacity(self.variables);
        for variable in 0..self.variables {
            let positive = closed[2 * variable];
            let negative = closed[2 * variable + 1];
            if positive == negative {
                log::debug!(
                    "x{} and its negation share a component, {} clauses unsatisfiable",
                    variable + 1,
                    self.clauses.len()
                );
                return Err(Error::Unsatisfiable);
            }
            values.push(positive < negative);
        }

        Ok(Assignment { values })
    }
}

/// Truth values for the variables of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// Returns the value of the 1-based `variable`, or `None` if it is out of range.
    #[must_use]
    pub fn value(&self, variable: usize) -> Option<bool> {
        variable
            .checked_sub(1)
            .and_then(|index| self.values.get(index).copied())
    }

    /// Returns all values, variable 1 first.
    #[must_use]
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Returns `true` if every clause has a true literal under this assignment.
    ///
    /// Literals naming variables outside the assignment count as false.
    #[must_use]
    pub fn satisfies(&self, clauses: &[(i64, i64)]) -> bool {
        clauses
            .iter()
            .all(|&(a, b)| self.literal(a) || self.literal(b))
    }

    fn literal(&self, literal: i64) -> bool {
        let value = usize::try_from(literal.unsigned_abs())
            .ok()
            .and_then(|variable| self.value(variable));
        match value {
            Some(value) => value == (literal > 0),
            None => false,
        }
    }
}

/// Decides a 2-CNF formula.
///
/// Returns the satisfying assignment found, or `None` if the formula is unsatisfiable.
///
/// # Errors
///
/// Returns [`Error::InvalidLiteral`] if a literal is zero or names a variable above
/// [`MAX_VARIABLES`].
pub fn is_2satisfiable(clauses: &[(i64, i64)]) -> Result<Option<Assignment>> {
    match TwoSat::new(clauses)?.solve() {
        Ok(assignment) => Ok(Some(assignment)),
        Err(Error::Unsatisfiable) => Ok(None),
        Err(error) => Err(error),
    }
}

fn variable_of(literal: i64) -> Result<usize> {
    match usize::try_from(literal.unsigned_abs()) {
        Ok(variable) if (1..=MAX_VARIABLES).contains(&variable) => Ok(variable),
        _ => Err(Error::InvalidLiteral(literal)),
    }
}

fn literal_vertex(literal: i64) -> Result<VertexId> {
    let base = 2 * (variable_of(literal)? - 1);
    Ok(VertexId::new(if literal > 0 { base } else { base + 1 }))
}

fn negate(vertex: VertexId) -> VertexId {
    VertexId::new(vertex.index() ^ 1)
}
