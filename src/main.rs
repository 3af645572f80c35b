mod allocator;
mod group;
mod message;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "santa-allocator")]
#[command(about = "Draws secret santa recipients for a group and writes the messages", long_about = None)]
struct Args {
    /// Group file with one participant name per line
    #[arg(short, long, default_value = "group.txt")]
    group: PathBuf,

    /// Message template file ({santa} and {recipient} placeholders)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Directory for the per-santa message files
    #[arg(short, long, default_value = "messages")]
    output: PathBuf,

    /// Optional random seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the full (santa, recipient) list as JSON ("-" for stdout)
    #[arg(long)]
    reveal: Option<String>,

    /// Verbose output level
    #[arg(short, long, default_value_t = 0)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let pairings = group::import_group(&args.group)?;
    if pairings.len() < 2 {
        bail!(
            "need at least 2 participants in {}, got {}",
            args.group.display(),
            pairings.len()
        );
    }
    if args.verbose > 0 {
        eprintln!(
            "loaded {} participants from {} (seed={:?})",
            pairings.len(),
            args.group.display(),
            args.seed
        );
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pairings = allocator::allocate(pairings, &mut rng)?;

    let template = match &args.template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read template file: {}", path.display()))?,
        None => message::DEFAULT_TEMPLATE.to_string(),
    };
    message::write_messages(&pairings, &template, &args.output)?;
    println!(
        "wrote {} message files to {}",
        pairings.len(),
        args.output.display()
    );

    if let Some(target) = &args.reveal {
        message::export_reveal(&pairings, target)?;
    }

    Ok(())
}
