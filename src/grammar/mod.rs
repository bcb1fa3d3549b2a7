pub mod earley;
pub mod error;
pub mod grammar;
pub mod item;
pub mod parse;
pub mod pretty_print;
pub mod reachable;
pub mod symbol;

pub use earley::{Chart, Recognizer};
pub use error::Error;
pub use grammar::Grammar;
pub use item::{Item, ItemSet};
pub use parse::TokenMode;
pub use symbol::Symbol;

pub const EPSILON: &str = "ε";
pub const EPSILON_ASCII: &str = "-";
