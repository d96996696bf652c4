//! jucegen CLI
//!
//! Prompts for project details, merges them with the user configuration, and
//! writes a ready-to-build JUCE plugin project.

use std::path::PathBuf;

use clap::Parser;

use jucegen::config::{Config, Platform};
use jucegen::generator::{Generator, Outcome};
use jucegen::prompt::Prompter;

#[derive(Parser)]
#[command(name = "jucegen")]
#[command(about = "Interactive generator for JUCE audio plugin projects")]
struct Cli {
    /// Path to the user configuration file
    /// (default: ~/.config/jucegen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let prompt = Prompter::new(stdin.lock(), stdout.lock());
    let mut generator = Generator::new(prompt, &config, Platform::current());

    match generator.run()? {
        Outcome::Created(_) => Ok(()),
        Outcome::Cancelled => {
            println!("Project creation cancelled");
            Ok(())
        }
    }
}
