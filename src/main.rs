use std::{fs::read_to_string, path::PathBuf, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use frontend::{
    display_error, lexer::lexer::tokenize, parse_top_level_declaration, pretty_print,
    render_diagnostic,
};

/// Parses one top-level declaration and prints the resulting tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to parse
    path: PathBuf,

    #[arg(long, help = "Print the token stream instead of the tree")]
    tokens: bool,

    #[arg(long, help = "Print the tree on a single line")]
    compact: bool,

    #[arg(long, help = "Wrap every binary operation in parentheses")]
    grouped: bool,

    #[arg(short, long, help = "Report how long each phase took")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)
}

fn execute(cli: Cli) -> Result<()> {
    let file_name = cli
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.to_string_lossy().into_owned());

    let source = read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;

    let start = Instant::now();

    if cli.tokens {
        for token in tokenize(source, Some(file_name)) {
            token.debug();
        }

        if cli.verbose {
            eprintln!("Tokenized in {:?}", start.elapsed());
        }
        return Ok(());
    }

    let (declaration, diagnostics) = match parse_top_level_declaration(&source, &file_name) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("{}", display_error(&error, error.get_span().start, &source));
            bail!("parsing of {} aborted", file_name);
        }
    };

    if cli.verbose {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    for diagnostic in &diagnostics {
        eprintln!("{}", render_diagnostic(diagnostic, &source));
    }

    match declaration {
        Some(declaration) if cli.compact => println!("{}", declaration),
        Some(declaration) if cli.grouped => println!("{}", pretty_print(&declaration.grouped())),
        Some(declaration) => println!("{}", pretty_print(&declaration.to_string())),
        None => println!("<no declaration>"),
    }

    if !diagnostics.is_empty() {
        bail!(
            "{} error{} in {}",
            diagnostics.len(),
            if diagnostics.len() == 1 { "" } else { "s" },
            file_name
        );
    }

    Ok(())
}
