//! dailyrings - CLI entry point
//!
//! One pass: load config, fetch scores, draw the chart, print the summary.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io;

use dailyrings::{
    app::{self, RunOptions},
    cli::{Args, Commands},
    logging,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbosity());

    match &args.command {
        Some(Commands::Config) => show_config(&args),
        None => {
            let config = args.load_config()?;
            app::run(&config, &RunOptions::from_args(&args), &mut io::stdout()).await?;
            Ok(())
        }
    }
}

fn show_config(args: &Args) -> Result<()> {
    let config = args.load_config()?;

    println!("\n{}", "dailyrings configuration".bold().cyan());
    println!();
    println!("API:");
    println!("  Base URL: {}", config.base_url);
    println!("  API key:  {}", config.masked_key().dimmed());
    println!();
    println!("Output:");
    println!("  Chart:    {}", config.output.display());
    println!("  Enabled:  {}", if args.no_chart { "no" } else { "yes" });
    println!("  Verbosity: {}", args.verbosity().as_str());
    println!();

    Ok(())
}
