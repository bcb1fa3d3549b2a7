use std::io::{self, BufRead};
use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, ValueEnum};
use earley_recognizer::{Error, Grammar, Recognizer, TokenMode, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Plain,
    Latex,
    Json,
}

/// Reads a grammar, then answers Accept or Discard for every word on stdin.
#[derive(Parser)]
#[command(name = "earley-recognizer")]
struct AppArgs {
    /// Grammar file, one `Head -> alt | alt` group per line
    grammar: PathBuf,
    /// Start symbol (defaults to the first left side)
    #[arg(short, long)]
    start: Option<String>,
    /// Treat every character of a word as one token
    #[arg(short, long)]
    chars: bool,
    /// Print the productions before reading words
    #[arg(long)]
    prod: bool,
    /// Print the Earley chart of every word
    #[arg(long)]
    chart: bool,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
    /// Shorthand for `--format latex`
    #[arg(short = 'l', conflicts_with = "format")]
    latex: bool,
    /// Shorthand for `--format json`
    #[arg(short = 'j', conflicts_with_all = ["format", "latex"])]
    json: bool,
}

impl AppArgs {
    fn output_format(&self) -> OutputFormat {
        if self.latex {
            OutputFormat::Latex
        } else if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Stdin(#[from] io::Error),
    #[error(transparent)]
    Grammar(#[from] Error),
}

fn productions(g: &Grammar, format: OutputFormat) -> String {
    let t = g.to_production_output_vec();
    match format {
        OutputFormat::Plain => t.to_plaintext(),
        OutputFormat::Latex => t.to_latex(),
        OutputFormat::Json => t.to_json(),
    }
}

fn run(args: &AppArgs) -> Result<(), AppError> {
    let input = fs::read_to_string(&args.grammar).map_err(|source| AppError::Read {
        path: args.grammar.clone(),
        source,
    })?;
    let mut g = Grammar::parse(&input)?;
    if let Some(start) = &args.start {
        g.set_start_by_name(start)?;
    }
    let recognizer = Recognizer::new(&g)?;

    let format = args.output_format();
    let mode = if args.chars {
        TokenMode::Chars
    } else {
        TokenMode::Words
    };

    if args.prod {
        println!("{}", productions(&g, format));
    }

    for line in io::stdin().lock().lines() {
        let word = line?;
        let tokens = g.tokenize(&word, mode);
        let chart = match &tokens {
            Some(tokens) => Some(recognizer.build_chart(tokens)?),
            None => None,
        };
        let verdict = Verdict {
            word: &word,
            accepted: chart.as_ref().is_some_and(|c| recognizer.is_accepted(c)),
        };

        if args.chart {
            if let Some(chart) = &chart {
                let t = recognizer.to_chart_output(chart);
                println!(
                    "{}",
                    match format {
                        OutputFormat::Plain => t.to_plaintext(),
                        OutputFormat::Latex => t.to_latex(),
                        OutputFormat::Json => t.to_json(),
                    }
                );
            }
        }

        println!(
            "{}",
            match format {
                OutputFormat::Plain => verdict.to_plaintext().to_string(),
                OutputFormat::Latex => verdict.to_latex(),
                OutputFormat::Json => serde_json::to_string(&verdict).unwrap_or_default(),
            }
        );
    }

    Ok(())
}

fn main() {
    let args = AppArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
