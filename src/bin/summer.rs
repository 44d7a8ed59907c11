use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;

use snippets::logging;
use snippets::output::{self, SumReport};
use snippets::sum::{self, DEFAULT_NUMBERS};

/// Summer - adds up a list of integers and prints the result
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Integers to add (defaults to 1 2 3 4 5 6 8 9 10)
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Output in JSON format
    #[arg(short = 'j', long)]
    json: bool,

    /// Never color the output
    #[arg(long)]
    no_color: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, env = "SNIPPETS_LOG", default_value = logging::DEFAULT_LEVEL)]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    output::configure_color(io::stdout().is_terminal(), cli.no_color);

    let numbers = if cli.numbers.is_empty() {
        DEFAULT_NUMBERS.to_vec()
    } else {
        cli.numbers
    };
    let result = sum::try_sum(&numbers).context("sum overflows i64")?;
    let report = SumReport { numbers, result };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        output::output_json(&mut out, &report)?;
    } else {
        output::output_sum_text(&mut out, &report)?;
    }
    out.flush()?;

    Ok(())
}
