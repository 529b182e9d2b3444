use clap::Parser;
use image_evenizer::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evenize")]
#[command(about = "Pads PNG/JPEG images to even pixel dimensions, in place")]
#[command(version = "0.1.0")]
struct Cli {
    /// Directory tree to scan
    directory: PathBuf,

    /// Output file for the JSON scan summary
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    // Codec capability check happens before any filesystem work
    codec::probe()?;

    let summary = scan::run(&cli.directory)?;

    println!("Done. Processed {} images.", summary.padded);

    // Per-file failures are non-fatal; exit status stays 0
    if let Some(output_path) = cli.output {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(output_path, json)?;
        println!("Summary saved to file.");
    }

    Ok(())
}
