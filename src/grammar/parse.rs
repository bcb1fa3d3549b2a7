use super::error::{Error, Result};
use super::{Grammar, Symbol, EPSILON, EPSILON_ASCII};

/// How a word is split into terminal names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenMode {
    /// Whitespace-separated names.
    #[default]
    Words,
    /// Every non-whitespace character is one name.
    Chars,
}

fn is_epsilon(s: &str) -> bool {
    s == EPSILON || s == EPSILON_ASCII
}

impl Grammar {
    pub fn parse(grammar: &str) -> Result<Self> {
        let mut g = Self::new();

        let mut raw_productions: Vec<(Symbol, &str)> = Vec::new();

        let mut previous_left: Option<Symbol> = None;
        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let error = |message: &str| Error::Parse {
                line: i + 1,
                message: message.to_string(),
            };

            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(error("too many \"->\""));
            }
            let (left, rights) = if parts.len() == 2 {
                let left_str = parts[0].trim();
                if left_str.is_empty() {
                    return Err(error("empty left side"));
                } else if left_str.split_whitespace().count() != 1 {
                    return Err(error("left side contains whitespace"));
                }
                let left = match g.get_symbol_index(left_str) {
                    Some(s) => s,
                    None => g.add_non_terminal(left_str),
                };
                (left, parts[1].trim())
            } else {
                match (previous_left, parts[0].trim().strip_prefix('|')) {
                    (Some(left), Some(rights)) => (left, rights.trim()),
                    _ => return Err(error("cannot find left side")),
                }
            };

            previous_left = Some(left);
            raw_productions.push((left, rights));
        }

        for (left, rights) in raw_productions {
            for right in rights.split('|') {
                let right = right.trim();
                let symbols = if is_epsilon(right) {
                    Vec::new()
                } else {
                    right
                        .split_whitespace()
                        .map(|s| match g.get_symbol_index(s) {
                            Some(symbol) => symbol,
                            None => g.add_terminal(s),
                        })
                        .collect()
                };
                g.add_rule(left, symbols);
            }
        }

        let first_left = g.non_terminal_iter().next();
        if let Some(start) = first_left {
            g.set_start(start);
        }

        Ok(g)
    }

    /// Points the start symbol at the nonterminal called `name`.
    pub fn set_start_by_name(&mut self, name: &str) -> Result<()> {
        match self.get_symbol_index(name) {
            Some(s) if !s.is_terminal() => {
                self.set_start(s);
                Ok(())
            }
            _ => Err(Error::UndefinedSymbol(name.to_string())),
        }
    }

    /// Maps `word` onto this grammar's symbols by name.
    ///
    /// Returns `None` if some token has no symbol: such a word is outside the
    /// language no matter what the rules say.
    pub fn tokenize(&self, word: &str, mode: TokenMode) -> Option<Vec<Symbol>> {
        let word = word.trim();
        if is_epsilon(word) {
            return Some(Vec::new());
        }
        match mode {
            TokenMode::Words => word
                .split_whitespace()
                .map(|t| self.get_symbol_index(t))
                .collect(),
            TokenMode::Chars => word
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| self.get_symbol_index(c.encode_utf8(&mut [0; 4])))
                .collect(),
        }
    }
}
