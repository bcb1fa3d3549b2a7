use std::collections::{HashSet, VecDeque};

use super::error::{Error, Result};
use super::{Grammar, Symbol};

impl Grammar {
    /// Nonterminals reachable from the start symbol, in discovery order.
    ///
    /// Every reachable nonterminal is queried for its alternatives, so a
    /// reachable nonterminal that heads no rule surfaces as
    /// [`Error::UndefinedSymbol`]. Unreachable ones are left alone.
    pub fn reachable_non_terminals(&self) -> Result<Vec<Symbol>> {
        let start = self.get_start().ok_or(Error::MissingStart)?;

        let mut visited: HashSet<Symbol> = HashSet::from([start]);
        let mut order = vec![start];
        let mut q: VecDeque<Symbol> = VecDeque::from([start]);

        while let Some(nt) = q.pop_front() {
            for production in self.right_sides(nt)? {
                for &s in production {
                    if !s.is_terminal() && visited.insert(s) {
                        order.push(s);
                        q.push_back(s);
                    }
                }
            }
        }

        Ok(order)
    }
}
