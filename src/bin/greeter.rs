use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use snippets::counting::{self, LoopConfig};
use snippets::logging;
use snippets::output::{self, GreeterReport};
use snippets::speaker::{self, Speaker};

/// Greeter - builds a dog and a cat, then counts until it jumps out of the loop
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Also print what the dog and the cat say
    #[arg(long)]
    speak: bool,

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

    let pets = speaker::default_pets();
    debug!(count = pets.len(), "constructed speakers");

    let trace = counting::run(&LoopConfig::default());

    if cli.json {
        let speaking: &[speaker::Pet] = if cli.speak { &pets[..] } else { &[] };
        let report = GreeterReport::new(speaking, trace);
        let mut out = io::stdout().lock();
        output::output_json(&mut out, &report)?;
        out.flush()?;
        return Ok(());
    }

    if cli.speak {
        for pet in &pets {
            pet.speak()?;
        }
    }

    let report = GreeterReport::new(&[], trace);
    let mut out = io::stdout().lock();
    output::output_greeter_text(&mut out, &report)?;
    out.flush()?;

    Ok(())
}
