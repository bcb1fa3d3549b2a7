extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::pretty_print::Verdict;
pub use grammar::{Chart, Error, Grammar, Item, ItemSet, Recognizer, Symbol, TokenMode};

/// Tests every line of `words` against `grammar`, one character per token.
pub fn accept_lines<'a>(grammar: &str, words: &'a str) -> Result<Vec<Verdict<'a>>, Error> {
    let g = Grammar::parse(grammar)?;
    let r = Recognizer::new(&g)?;

    let mut verdicts = Vec::new();
    for word in words.lines() {
        let accepted = match g.tokenize(word, TokenMode::Chars) {
            Some(tokens) => r.accept(&tokens)?,
            None => false,
        };
        verdicts.push(Verdict { word, accepted });
    }
    Ok(verdicts)
}

#[wasm_bindgen]
pub fn accept_to_json(grammar: &str, words: &str) -> String {
    match accept_lines(grammar, words) {
        Ok(verdicts) => serde_json::to_string(&verdicts).unwrap_or_default(),
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

#[cfg(test)]
mod parse_tests {
    use crate::Grammar;

    #[test]
    fn simple_parse() {
        let g = Grammar::parse("S -> a").unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("a").unwrap();

        assert_eq!(g.get_symbol_name(s), "S");
        assert_eq!(g.get_symbol_name(a), "a");
        assert!(!s.is_terminal());
        assert!(a.is_terminal());
        assert_eq!(g.get_start(), Some(s));

        assert_eq!(g.right_sides(s).unwrap()[0], vec![a]);
    }

    #[test]
    fn start_is_first_left_side() {
        let g = Grammar::parse("x -> y S\nS -> x | b\ny -> -").unwrap();
        let x = g.get_symbol_index("x").unwrap();
        assert!(!x.is_terminal());
        assert_eq!(g.get_start(), Some(x));
        assert_eq!(g.non_terminal_iter().next(), Some(x));

        assert_eq!(Grammar::parse("").unwrap().get_start(), None);
    }

    #[test]
    fn simple_parse_with_space_and_newline() {
        let g = Grammar::parse("  S -> a \n | b c").unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("a").unwrap();
        let b = g.get_symbol_index("b").unwrap();
        let c = g.get_symbol_index("c").unwrap();

        assert_eq!(g.right_sides(s).unwrap(), &[vec![a], vec![b, c]]);
    }

    #[test]
    fn epsilon_alternatives() {
        let g = Grammar::parse("S -> a S | ε | -").unwrap();
        let s = g.get_symbol_index("S").unwrap();
        // both spellings are the same empty body
        assert_eq!(g.right_sides(s).unwrap().len(), 2);
        assert!(g.right_sides(s).unwrap()[1].is_empty());
    }

    #[test]
    fn left_sides_are_non_terminals_everywhere() {
        let g = Grammar::parse("S -> A b\nA -> a").unwrap();
        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("A").unwrap();
        assert!(!a.is_terminal());
        assert_eq!(g.right_sides(s).unwrap()[0][0], a);
    }

    #[test]
    fn start_override() {
        let mut g = Grammar::parse("S -> A\nA -> a").unwrap();
        g.set_start_by_name("A").unwrap();
        assert_eq!(g.get_start(), g.get_symbol_index("A"));
        assert!(g.set_start_by_name("a").is_err());
        assert!(g.set_start_by_name("Z").is_err());
    }

    #[test]
    fn empty_parse() {
        let g = Grammar::parse("  \n  ").unwrap();
        assert_eq!(g.get_start(), None);
    }

    #[test]
    #[should_panic]
    fn two_rightarrows_parse() {
        let _g = Grammar::parse("S -> a -> b").unwrap();
    }

    #[test]
    #[should_panic]
    fn no_left_parse() {
        let _g = Grammar::parse("-> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn no_previous_left_parse() {
        let _g = Grammar::parse("| a b\n S -> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn left_contain_space() {
        let _g = Grammar::parse("S a S -> x").unwrap();
    }

    #[test]
    fn error_names_line() {
        let e = Grammar::parse("S -> a\n\nT -> -> b").unwrap_err();
        assert_eq!(e.to_string(), "Line 3: too many \"->\"");
    }
}

#[cfg(test)]
mod tokenize_tests {
    use crate::{Grammar, TokenMode};

    #[test]
    fn words_and_chars() {
        let g = Grammar::parse("S -> id + id | a b").unwrap();
        let id = g.get_symbol_index("id").unwrap();
        let plus = g.get_symbol_index("+").unwrap();
        let a = g.get_symbol_index("a").unwrap();
        let b = g.get_symbol_index("b").unwrap();

        assert_eq!(
            g.tokenize("id + id", TokenMode::Words),
            Some(vec![id, plus, id])
        );
        assert_eq!(g.tokenize("ab", TokenMode::Chars), Some(vec![a, b]));
        assert_eq!(g.tokenize("a b", TokenMode::Chars), Some(vec![a, b]));
        assert_eq!(g.tokenize("ab", TokenMode::Words), None);
        assert_eq!(g.tokenize("abc", TokenMode::Chars), None);
    }

    #[test]
    fn empty_words() {
        let g = Grammar::parse("S -> a").unwrap();
        for word in ["", "  ", "-", "ε"] {
            assert_eq!(g.tokenize(word, TokenMode::Chars), Some(vec![]));
            assert_eq!(g.tokenize(word, TokenMode::Words), Some(vec![]));
        }
    }
}
