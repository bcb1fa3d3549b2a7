use std::collections::{HashMap, HashSet};

use super::error::{Error, Result};
use super::symbol::{Symbol, SymbolData};

#[derive(Debug, Clone, Default)]
pub struct Grammar {
    symbols: Vec<SymbolData>,
    symbol_table: HashMap<String, Symbol>,
    registered: HashSet<Symbol>,
    rules: HashMap<Symbol, Vec<Vec<Symbol>>>,
    start_symbol: Option<Symbol>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, name: &str, terminal: bool) -> Symbol {
        let symbol = Symbol::new(self.symbols.len(), terminal);
        self.symbols.push(SymbolData {
            name: name.to_string(),
            terminal,
        });
        self.symbol_table.insert(name.to_string(), symbol);
        symbol
    }

    /// Allocates a fresh terminal. Reusing a name shadows the older symbol in
    /// the name table but does not merge the two identities.
    pub fn add_terminal(&mut self, name: &str) -> Symbol {
        self.allocate(name, true)
    }

    pub fn add_non_terminal(&mut self, name: &str) -> Symbol {
        self.allocate(name, false)
    }

    /// Adds `head -> body`. Duplicate bodies for the same head are ignored.
    pub fn add_rule(&mut self, head: Symbol, body: Vec<Symbol>) {
        self.registered.insert(head);
        self.registered.extend(body.iter().copied());

        let alternatives = self.rules.entry(head).or_default();
        if !alternatives.contains(&body) {
            alternatives.push(body);
        }
    }

    pub fn right_sides(&self, symbol: Symbol) -> Result<&[Vec<Symbol>]> {
        self.rules
            .get(&symbol)
            .map(|alternatives| alternatives.as_slice())
            .ok_or_else(|| Error::UndefinedSymbol(self.get_symbol_name(symbol).to_string()))
    }

    pub fn get_start(&self) -> Option<Symbol> {
        self.start_symbol
    }

    pub fn set_start(&mut self, start: Symbol) {
        self.start_symbol = Some(start);
    }

    pub fn is_registered(&self, symbol: Symbol) -> bool {
        self.registered.contains(&symbol)
    }

    pub fn terminal_iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbol_iter().filter(|s| s.is_terminal())
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbol_iter().filter(|s| !s.is_terminal())
    }

    fn symbol_iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, data)| Symbol::new(i, data.terminal))
    }

    pub fn get_symbol_index(&self, name: &str) -> Option<Symbol> {
        self.symbol_table.get(name).copied()
    }

    pub fn get_symbol_name(&self, symbol: Symbol) -> &str {
        self.symbols
            .get(symbol.index())
            .map(|data| data.name.as_str())
            .unwrap_or("?")
    }

    pub fn get_symbol_prime_name(&self, mut name: String) -> String {
        while self.symbol_table.contains_key(&name) {
            name.push('\'');
        }
        name
    }

    pub fn production_to_vec_str(&self, production: &[Symbol]) -> Vec<&str> {
        production
            .iter()
            .map(|s| self.get_symbol_name(*s))
            .collect()
    }
}
