use chrono::Utc;
use clap::{Parser, Subcommand};
use emotes::{EMOJI_DIR, INDEX_PATH, README_PATH, build, dedup, listing, output};
use std::path::Path;

#[derive(Parser)]
#[command(name = "emotes")]
#[command(about = "Listing generator for the emote image collection")]
#[command(long_about = "\
Listing generator for the emote image collection

Your filesystem is the data source. Every png/gif/jpg/jpeg directly under
emoji/ is an emote; its filename is its name.

  emoji/
  ├── Ant.png                      # Section 'A' in the README
  ├── ant.gif                      # Section 'a' (no case folding)
  ├── :wave:.gif                   # Section ':'
  └── 1up.png                      # Fallback section \\[^a-zA-Z:\\]

Outputs are written to fixed paths in the working directory:
  README.md    Markdown listing, grid of images with name labels
  index.html   Self-contained searchable index")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate README.md and index.html from the emoji/ directory
    Build,
    /// Delete byte-identical duplicate images, keeping the first by name
    Dedup,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let files = build::build(
                Path::new(EMOJI_DIR),
                Path::new(README_PATH),
                Path::new(INDEX_PATH),
                Utc::now(),
            )?;

            let listing = listing::group_files(&files);
            output::print_build_output(&listing, files.len());
        }
        Command::Dedup => match dedup::run(Path::new(EMOJI_DIR))? {
            None => println!("No image files found in {}/.", EMOJI_DIR),
            Some(report) => {
                println!("Scanning {} files...", report.scanned);
                output::print_dedup_report(&report);
            }
        },
    }

    Ok(())
}
