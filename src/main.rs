//! pwd-score - password strength checker CLI
//!
//! Scores a password against the four criteria or generates a strong one.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pwd_score::{check_password_strength, generate, GeneratorConfig, ScoreResult, StrengthLevel};
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, BufRead, IsTerminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwd-score")]
#[command(
    author,
    version,
    about = "Score password strength and generate strong passwords"
)]
#[command(long_about = "
pwd-score rates a password on four criteria: at least 8 characters,
upper and lowercase letters, a number and one of !@#$%^&*.

EXAMPLES:
    pwd-score check 'Tr0ub4dor&3'     # Score a password
    pwd-score check < secret.txt      # Read the password from stdin
    pwd-score generate                # 12 character strong password
    pwd-score generate -l 20 --check  # Generate and score it
    pwd-score --no-color check 'x'    # Plain text output
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a password
    Check {
        /// Password to score (one line is read from stdin when omitted).
        /// An empty password prints no report.
        password: Option<String>,
    },
    /// Generate a strong password
    Generate {
        /// Password length (default: PWD_GENERATE_LENGTH or 12)
        #[arg(short, long)]
        length: Option<usize>,

        /// Print the strength report for the generated password
        #[arg(long)]
        check: bool,
    },
}

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = Palette {
        enabled: !cli.no_color && io::stdout().is_terminal(),
    };

    match cli.command {
        Command::Check { password } => {
            let password = match password {
                Some(p) => SecretString::new(p.into()),
                None => read_password_from_stdin()?,
            };
            if password.expose_secret().is_empty() {
                eprintln!("No password entered, nothing to analyze");
                return Ok(());
            }
            print_report(&check_password_strength(&password), &palette);
        }
        Command::Generate { length, check } => {
            let mut config = GeneratorConfig::from_env();
            if let Some(length) = length {
                config = config.with_length(length);
            }
            tracing::debug!(length = config.length, max_attempts = config.max_attempts, "generating");

            let password = generate(&config).context("failed to generate password")?;
            println!("{}", password.expose_secret());

            if check {
                println!();
                print_report(&check_password_strength(&password), &palette);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn read_password_from_stdin() -> Result<SecretString> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    Ok(SecretString::new(password.into()))
}

fn level_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::Critical | StrengthLevel::VeryWeak => RED,
        StrengthLevel::Weak | StrengthLevel::Moderate => YELLOW,
        StrengthLevel::Strong => GREEN,
    }
}

fn print_report(result: &ScoreResult, palette: &Palette) {
    let level = result.strength();
    let color = level_color(level);

    let heading = format!("{} {} Password", level.icon(), level);
    println!(
        "{}  {}",
        palette.paint(BOLD, &heading),
        palette.paint(color, &format!("{}/{}", result.score, pwd_score::MAX_SCORE))
    );

    let filled = usize::from(result.percent()) / 5;
    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled));
    println!("{}", palette.paint(color, &bar));

    println!();
    println!("{}", palette.paint(BOLD, "Security Checklist"));
    for (criterion, met) in result.checklist() {
        let mark = if met {
            palette.paint(GREEN, "✔")
        } else {
            palette.paint(RED, "✘")
        };
        println!("  {mark} {criterion}");
    }

    if !result.messages.is_empty() {
        println!();
        println!("{}", palette.paint(BOLD, "Improvement Suggestions"));
        for suggestion in &result.messages {
            println!("  🚨 {suggestion}");
        }
    }

    if result.is_strong() {
        println!();
        println!(
            "{}",
            palette.paint(GREEN, "🎉 Excellent! Your password is fortress-strong!")
        );
    }
}
