//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use cardcheck::config::GlobalConfig;
use cardcheck::output::OutputMode;

/// cardcheck - Payment card number validation
#[derive(Parser, Debug)]
#[command(
    name = "cardcheck",
    version,
    about = "Payment card number validation",
    long_about = "Check card numbers against issuer numbering schemes and the Luhn checksum.\n\n\
                  A number is valid when it matches one issuer scheme and its check digit is right.\n\
                  Hyphens are ignored. No network lookups are made."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Print card numbers unmasked
    #[arg(long, global = true)]
    pub reveal: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate card numbers (reads one per line from stdin if none given)
    Validate {
        /// Card numbers, optionally hyphenated
        numbers: Vec<String>,
    },

    /// Print the issuer of a valid card number (empty if invalid)
    Issuer {
        /// Card number, optionally hyphenated
        number: String,
    },

    /// List issuer schemes in the order they are tried
    Schemes,

    /// Show the configuration file location and values
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Display settings resolved from config file and flags
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    /// Output mode
    pub mode: OutputMode,
    /// Whether to mask card numbers
    pub mask: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();
    let display = DisplayOptions {
        mode: if cli.json || config.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        },
        mask: config.output.mask && !cli.reveal,
    };

    match cli.command {
        Some(Command::Validate { numbers }) => commands::validate(&numbers, display),
        Some(Command::Issuer { number }) => {
            commands::issuer(&number, display);
            Ok(())
        },
        Some(Command::Schemes) => {
            commands::schemes(display.mode);
            Ok(())
        },
        Some(Command::Config { init }) => commands::config(&config, init, display.mode),
        Some(Command::Version) => {
            if display.mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cardcheck::VERSION
                    })
                );
            } else {
                println!("cardcheck v{}", cardcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if display.mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cardcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cardcheck v{}", cardcheck::VERSION);
                println!("\nRun 'cardcheck --help' for usage");
                println!("Run 'cardcheck validate <number>' to check a card number");
            }
            Ok(())
        },
    }
}
