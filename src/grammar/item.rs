use std::collections::HashSet;
use std::rc::Rc;

use super::error::{Error, Result};
use super::Symbol;

/// A dotted production `head -> body` that started matching at `start` and
/// has matched the first `dot` symbols of `body`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Item {
    head: Symbol,
    body: Rc<[Symbol]>,
    start: usize,
    dot: usize,
}

impl Item {
    pub fn new(head: Symbol, body: impl Into<Rc<[Symbol]>>, start: usize) -> Self {
        Self {
            head,
            body: body.into(),
            start,
            dot: 0,
        }
    }

    pub fn head(&self) -> Symbol {
        self.head
    }

    pub fn body(&self) -> &[Symbol] {
        &self.body
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn dot(&self) -> usize {
        self.dot
    }

    pub fn is_dot_at_end(&self) -> bool {
        self.dot == self.body.len()
    }

    pub fn next_symbol(&self) -> Option<Symbol> {
        self.body.get(self.dot).copied()
    }

    pub fn symbol_after_dot(&self) -> Result<Symbol> {
        self.next_symbol().ok_or(Error::InvalidOperation(
            "dot is at the end, there is no symbol after it",
        ))
    }

    /// The same item with the dot moved over one more symbol.
    pub fn successor(&self) -> Result<Self> {
        if self.is_dot_at_end() {
            return Err(Error::InvalidOperation(
                "dot is at the end, the item has no successor",
            ));
        }
        Ok(self.advance())
    }

    // Callers have already seen a symbol after the dot.
    fn advance(&self) -> Self {
        Self {
            head: self.head,
            body: Rc::clone(&self.body),
            start: self.start,
            dot: self.dot + 1,
        }
    }

    pub(super) fn advance_over(&self, symbol: Symbol) -> Option<Self> {
        (self.next_symbol() == Some(symbol)).then(|| self.advance())
    }
}

/// Items valid at one input position, grouped by what follows the dot.
#[derive(Debug, Clone, Default)]
pub struct ItemSet {
    before_terminal: HashSet<Item>,
    before_non_terminal: HashSet<Item>,
    completed: HashSet<Item>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.before_terminal.len() + self.before_non_terminal.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the item was new.
    pub fn insert(&mut self, item: Item) -> bool {
        match item.next_symbol() {
            None => self.completed.insert(item),
            Some(s) if s.is_terminal() => self.before_terminal.insert(item),
            Some(_) => self.before_non_terminal.insert(item),
        }
    }

    pub fn contains(&self, item: &Item) -> bool {
        match item.next_symbol() {
            None => self.completed.contains(item),
            Some(s) if s.is_terminal() => self.before_terminal.contains(item),
            Some(_) => self.before_non_terminal.contains(item),
        }
    }

    pub fn awaiting_terminal(&self) -> impl Iterator<Item = &Item> {
        self.before_terminal.iter()
    }

    pub fn awaiting_non_terminal(&self) -> impl Iterator<Item = &Item> {
        self.before_non_terminal.iter()
    }

    pub fn completed(&self) -> impl Iterator<Item = &Item> {
        self.completed.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.before_terminal
            .iter()
            .chain(self.before_non_terminal.iter())
            .chain(self.completed.iter())
    }

    /// All items in a stable order, for output.
    pub fn sorted(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.iter().collect();
        items.sort();
        items
    }
}

impl Extend<Item> for ItemSet {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
