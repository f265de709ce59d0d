//! Pairwise collision matrix for a table of named filters

use std::fmt;

use planar_physics::{Bitmask, CollisionFilter, FilterRule};

/// Result of testing every filter in a table against every other
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionMatrix {
    names: Vec<String>,
    /// Row-major, `names.len()` squared entries
    cells: Vec<bool>,
}

impl CollisionMatrix {
    /// Evaluate `rule` for every ordered pair in the table (self pairs included)
    pub fn evaluate<M, R>(entries: &[(String, CollisionFilter<M>)], rule: &R) -> Self
    where
        M: Bitmask,
        R: FilterRule<M>,
    {
        let names: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();
        let mut cells = Vec::with_capacity(entries.len() * entries.len());

        for (name_a, a) in entries {
            for (name_b, b) in entries {
                let collides = rule.should_collide(a, b);
                if !collides {
                    log::trace!("Rejected pair '{}' / '{}'", name_a, name_b);
                }
                cells.push(collides);
            }
        }

        let matrix = Self { names, cells };
        log::debug!(
            "Evaluated {} filters: {} colliding pairs",
            matrix.len(),
            matrix.cells.iter().filter(|&&c| c).count()
        );
        matrix
    }

    /// Number of filters
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Filter names in table order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Result for the filters at rows `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        if i >= self.len() || j >= self.len() {
            return None;
        }
        self.cells.get(i * self.len() + j).copied()
    }

    /// Result for two filters by name
    pub fn collides(&self, a: &str, b: &str) -> Option<bool> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.get(i, j)
    }

    /// Row of the first filter called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Check that swapping every pair gives the same answer
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

impl fmt::Display for CollisionMatrix {
    /// Grid with `x` for colliding pairs and `.` for rejected ones
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.names.iter().map(String::len).max().unwrap_or(0);

        write!(f, "{:width$}", "", width = width)?;
        for j in 0..self.len() {
            write!(f, " {}", j)?;
        }
        writeln!(f)?;

        for (i, name) in self.names.iter().enumerate() {
            write!(f, "{:width$}", name, width = width)?;
            for j in 0..self.len() {
                let mark = if self.get(i, j) == Some(true) { "x" } else { "." };
                write!(f, " {:>w$}", mark, w = j.to_string().len())?;
            }
            writeln!(f, "  ({})", i)?;
        }
        Ok(())
    }
}
