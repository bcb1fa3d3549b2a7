//! Earley recognition: build, from left to right, the set of items valid at
//! every input position, then look for the augmented start rule completed
//! over the whole input.

use std::ops::{Index, IndexMut};

use super::error::{Error, Result};
use super::{Grammar, Item, ItemSet, Symbol};

/// One [`ItemSet`] per input position, `0..=len`.
#[derive(Debug, Clone)]
pub struct Chart {
    sets: Vec<ItemSet>,
}

impl Chart {
    /// A chart for an input of `input_len` tokens.
    pub fn new(input_len: usize) -> Self {
        Self {
            sets: vec![ItemSet::new(); input_len + 1],
        }
    }

    /// Number of item sets, one more than the input length.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn last(&self) -> &ItemSet {
        &self.sets[self.sets.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSet> {
        self.sets.iter()
    }

    /// Mutable access to two distinct positions at once.
    fn pair_mut(&mut self, i1: usize, i2: usize) -> (&mut ItemSet, &mut ItemSet) {
        assert_ne!(i1, i2, "cannot borrow chart position {} twice", i1);
        if i1 < i2 {
            let (s1, s2) = self.sets.split_at_mut(i2);
            (&mut s1[i1], &mut s2[0])
        } else {
            let (s2, s1) = self.sets.split_at_mut(i1);
            (&mut s1[0], &mut s2[i2])
        }
    }
}

impl Index<usize> for Chart {
    type Output = ItemSet;

    fn index(&self, position: usize) -> &ItemSet {
        &self.sets[position]
    }
}

impl IndexMut<usize> for Chart {
    fn index_mut(&mut self, position: usize) -> &mut ItemSet {
        &mut self.sets[position]
    }
}

#[derive(Debug, Clone)]
pub struct Recognizer {
    grammar: Grammar,
    /// `S' -> S .` started at 0; the only production of the augmented start.
    accepting: Item,
}

impl Recognizer {
    /// Wraps a copy of `grammar`, augmented with a fresh start rule `S' -> S`.
    ///
    /// Fails if no start symbol is set or if a nonterminal reachable from it
    /// heads no rule. `grammar` itself is left untouched.
    pub fn new(grammar: &Grammar) -> Result<Self> {
        grammar.reachable_non_terminals()?;
        let start = grammar.get_start().ok_or(Error::MissingStart)?;

        let mut grammar = grammar.clone();
        let name = grammar.get_symbol_prime_name(grammar.get_symbol_name(start).to_string());
        let augmented = grammar.add_non_terminal(&name);
        grammar.add_rule(augmented, vec![start]);
        grammar.set_start(augmented);

        let accepting = Item::new(augmented, vec![start], 0).successor()?;

        Ok(Self { grammar, accepting })
    }

    /// The augmented grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The synthetic start symbol `S'`.
    pub fn start(&self) -> Symbol {
        self.accepting.head()
    }

    fn initial_item(&self) -> Item {
        Item::new(self.accepting.head(), self.accepting.body(), 0)
    }

    /// For every item awaiting a nonterminal, adds that nonterminal's
    /// alternatives with the dot at the front, starting at `position`.
    ///
    /// Only items present on entry are expanded; a newly predicted item that
    /// itself awaits a nonterminal is picked up by the next call. Returns
    /// whether the set grew.
    pub fn predict(&self, item_set: &mut ItemSet, position: usize) -> Result<bool> {
        let mut to_add: Vec<Item> = Vec::new();
        for item in item_set.awaiting_non_terminal() {
            let from = item.symbol_after_dot()?;
            for right_side in self.grammar.right_sides(from)? {
                to_add.push(Item::new(from, right_side.as_slice(), position));
            }
        }

        let old_size = item_set.len();
        item_set.extend(to_add);
        Ok(old_size != item_set.len())
    }

    /// For every completed item at `position`, advances the items of its
    /// origin set that were waiting for its head. Returns whether
    /// `chart[position]` grew.
    pub fn complete(&self, chart: &mut Chart, position: usize) -> bool {
        let mut to_add: Vec<Item> = Vec::new();
        for completed in chart[position].completed() {
            let head = completed.head();
            // origin == position for zero-width completions
            for item in chart[completed.start()].awaiting_non_terminal() {
                if let Some(next) = item.advance_over(head) {
                    to_add.push(next);
                }
            }
        }

        let old_size = chart[position].len();
        chart[position].extend(to_add);
        old_size != chart[position].len()
    }

    /// Runs predict and complete at `position` until neither adds anything.
    pub fn closure(&self, chart: &mut Chart, position: usize) -> Result<()> {
        loop {
            let mut changed = self.predict(&mut chart[position], position)?;
            changed |= self.complete(chart, position);
            if !changed {
                return Ok(());
            }
        }
    }

    /// Moves every item of `current` that awaits `token` into `next`, past
    /// that token.
    pub fn scan(&self, current: &ItemSet, next: &mut ItemSet, token: Symbol) {
        next.extend(
            current
                .awaiting_terminal()
                .filter_map(|item| item.advance_over(token)),
        );
    }

    /// Builds the full chart for `word`.
    pub fn build_chart(&self, word: &[Symbol]) -> Result<Chart> {
        let mut chart = Chart::new(word.len());
        chart[0].insert(self.initial_item());
        self.closure(&mut chart, 0)?;

        for (i, &token) in word.iter().enumerate() {
            let (current, next) = chart.pair_mut(i, i + 1);
            self.scan(current, next, token);
            self.closure(&mut chart, i + 1)?;
        }

        Ok(chart)
    }

    pub fn is_accepted(&self, chart: &Chart) -> bool {
        !chart.is_empty() && chart.last().contains(&self.accepting)
    }

    pub fn accept(&self, word: &[Symbol]) -> Result<bool> {
        let chart = self.build_chart(word)?;
        Ok(self.is_accepted(&chart))
    }
}
