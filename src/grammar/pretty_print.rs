use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Chart, Grammar, Item, Recognizer, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize) -> String {
        self.rights
            .iter()
            .map(|right| right.join(" "))
            .enumerate()
            .map(|(i, right)| {
                if i == 0 {
                    format!("{:>width$} -> {}", self.left, right, width = left_width)
                } else {
                    format!("{:>width$}  | {}", "", right, width = left_width)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One row of an `array` environment: `left & \rightarrow & rights`.
    pub fn to_latex(&self) -> String {
        if self.rights.is_empty() {
            return String::new();
        }

        let right = self
            .rights
            .iter()
            .map(|right| {
                right
                    .iter()
                    .map(|s| escape::tex(*s))
                    .collect::<Vec<_>>()
                    .join(" \\ ")
            })
            .collect::<Vec<_>>()
            .join(" \\mid ");

        format!("{} & \\rightarrow &{}", escape::tex(self.left), right).replace(EPSILON, "\\epsilon")
    }
}

#[derive(Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        let left_max_len = self
            .productions
            .iter()
            .map(|p| p.left.chars().count())
            .max()
            .unwrap_or(0);
        self.productions
            .iter()
            .map(|s| s.to_plaintext(left_max_len))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.productions.iter().map(|s| s.to_latex()))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Grammar {
    pub fn to_production_output_vec(&self) -> ProductionOutputVec<'_> {
        let mut productions = Vec::new();
        for nt in self.non_terminal_iter() {
            let Ok(right_sides) = self.right_sides(nt) else {
                continue;
            };
            let rights = right_sides
                .iter()
                .map(|production| {
                    if production.is_empty() {
                        vec![EPSILON]
                    } else {
                        self.production_to_vec_str(production)
                    }
                })
                .collect();
            productions.push(ProductionOutput {
                left: self.get_symbol_name(nt),
                rights,
            });
        }
        ProductionOutputVec { productions }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemOutput<'a> {
    head: &'a str,
    body: Vec<&'a str>,
    dot: usize,
    start: usize,
}

impl<'a> ItemOutput<'a> {
    fn new(g: &'a Grammar, item: &Item) -> Self {
        Self {
            head: g.get_symbol_name(item.head()),
            body: g.production_to_vec_str(item.body()),
            dot: item.dot(),
            start: item.start(),
        }
    }

    pub fn to_plaintext(&self) -> String {
        let mut right = self.body.clone();
        right.insert(self.dot, ".");
        format!("{} -> {}, {}", self.head, right.join(" "), self.start)
    }

    pub fn to_latex(&self) -> String {
        let mut right: Vec<String> = self.body.iter().map(|s| escape::tex(*s).to_string()).collect();
        right.insert(self.dot, "\\cdot".to_string());
        format!(
            "${} \\rightarrow {}$ & {}",
            escape::tex(self.head),
            right.join(" \\ "),
            self.start
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ChartOutput<'a> {
    sets: Vec<Vec<ItemOutput<'a>>>,
    accepted: bool,
}

impl ChartOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        let sets = self
            .sets
            .iter()
            .enumerate()
            .map(|(i, set)| {
                std::iter::once(format!("I{}", i))
                    .chain(set.iter().map(|item| item.to_plaintext()))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{}\n\naccepted: {}", sets, self.accepted)
    }

    pub fn to_latex(&self) -> String {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| {
                let content = set
                    .iter()
                    .map(|item| item.to_latex())
                    .collect::<Vec<_>>()
                    .join(" \\\\\n");
                format!(
                    "\\begin{{tabular}}{{l|c}}\n\\multicolumn{{2}}{{c}}{{$I_{{{}}}$}}\\\\\\hline\n{}\n\\end{{tabular}}",
                    i, content
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Recognizer {
    pub fn to_chart_output<'a>(&'a self, chart: &Chart) -> ChartOutput<'a> {
        let g = self.grammar();
        ChartOutput {
            sets: chart
                .iter()
                .map(|set| {
                    set.sorted()
                        .into_iter()
                        .map(|item| ItemOutput::new(g, item))
                        .collect()
                })
                .collect(),
            accepted: self.is_accepted(chart),
        }
    }
}

/// The outcome of testing one word.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Verdict<'a> {
    pub word: &'a str,
    pub accepted: bool,
}

impl Verdict<'_> {
    pub fn to_plaintext(&self) -> &'static str {
        if self.accepted {
            "Accept"
        } else {
            "Discard"
        }
    }

    pub fn to_latex(&self) -> String {
        format!("\\texttt{{{}}} & {}", escape::tex(self.word), self.to_plaintext())
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;
    use crate::TokenMode;

    #[test]
    fn productions_plaintext() {
        let g = Grammar::parse("S -> a S b S | ε\nLong -> S\n | -").unwrap();
        expect![[r#"
               S -> a S b S
                  | ε
            Long -> S
                  | ε"#]]
        .assert_eq(&g.to_production_output_vec().to_plaintext());
    }

    #[test]
    fn productions_latex() {
        let g = Grammar::parse("S -> a | ε").unwrap();
        expect![[r#"
            \[\begin{array}{cll}\\
            S & \rightarrow &a \mid \epsilon\\
            \end{array}\]"#]]
        .assert_eq(&g.to_production_output_vec().to_latex());
    }

    #[test]
    fn productions_json() {
        let g = Grammar::parse("S -> a S | ε").unwrap();
        assert_eq!(
            g.to_production_output_vec().to_json(),
            r#"{"productions":[{"left":"S","rights":[["a","S"],["ε"]]}]}"#
        );
    }

    #[test]
    fn chart_plaintext() {
        let g = Grammar::parse("S -> a").unwrap();
        let r = Recognizer::new(&g).unwrap();
        let word = g.tokenize("a", TokenMode::Chars).unwrap();
        let chart = r.build_chart(&word).unwrap();
        expect![[r#"
            I0
            S -> . a, 0
            S' -> . S, 0

            I1
            S -> a ., 0
            S' -> S ., 0

            accepted: true"#]]
        .assert_eq(&r.to_chart_output(&chart).to_plaintext());
    }

    #[test]
    fn chart_json() {
        let g = Grammar::parse("S -> ε").unwrap();
        let r = Recognizer::new(&g).unwrap();
        let chart = r.build_chart(&[]).unwrap();
        assert_eq!(
            r.to_chart_output(&chart).to_json(),
            r#"{"sets":[[{"head":"S","body":[],"dot":0,"start":0},{"head":"S'","body":["S"],"dot":0,"start":0},{"head":"S'","body":["S"],"dot":1,"start":0}]],"accepted":true}"#
        );
    }

    #[test]
    fn verdicts() {
        let yes = Verdict { word: "ab", accepted: true };
        let no = Verdict { word: "a_b", accepted: false };
        assert_eq!(yes.to_plaintext(), "Accept");
        assert_eq!(no.to_plaintext(), "Discard");
        assert_eq!(
            serde_json::to_string(&yes).unwrap(),
            r#"{"word":"ab","accepted":true}"#
        );
    }
}
