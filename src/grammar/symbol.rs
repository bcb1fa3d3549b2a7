use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A grammar symbol, identified by its slot in the owning grammar's arena.
///
/// Symbols are only handed out by [`Grammar::add_terminal`] and
/// [`Grammar::add_non_terminal`](crate::Grammar::add_non_terminal), so two
/// symbols compare equal exactly when they came from the same allocation.
///
/// [`Grammar::add_terminal`]: crate::Grammar::add_terminal
#[derive(Debug, Clone, Copy)]
pub struct Symbol {
    index: usize,
    terminal: bool,
}

impl Symbol {
    pub(super) fn new(index: usize, terminal: bool) -> Self {
        Self { index, terminal }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

/// Arena slot backing a [`Symbol`].
#[derive(Debug, Clone)]
pub struct SymbolData {
    pub name: String,
    pub terminal: bool,
}
