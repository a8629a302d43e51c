//! Command-line probe for `reminders_core`.
//!
//! # Responsibility
//! - Expose the contact helpers for quick manual checks.
//! - Keep output deterministic so scripts can rely on it.

use clap::{Parser, Subcommand};
use log::info;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "reminders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Contact helpers for the client reminders tool")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check an email address; exits 1 when invalid
    Email { input: String },
    /// Print a phone number in display form
    Phone { input: String },
    /// Print core linkage info
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = match cli.log_level.as_deref() {
            Some(level) => level,
            None => reminders_core::default_log_level(),
        };
        if let Err(err) = reminders_core::init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    }

    match cli.command {
        Command::Email { input } => {
            let valid = reminders_core::is_valid_email(&input);
            info!("event=cli_email module=cli status=ok valid={valid}");
            if valid {
                println!("valid");
                ExitCode::SUCCESS
            } else {
                println!("invalid");
                ExitCode::FAILURE
            }
        }
        Command::Phone { input } => {
            let formatted = reminders_core::format_phone(&input);
            info!(
                "event=cli_phone module=cli status=ok digits={}",
                reminders_core::phone_digits(&formatted).len()
            );
            println!("{formatted}");
            ExitCode::SUCCESS
        }
        Command::Info => {
            println!("reminders_core ping={}", reminders_core::ping());
            println!("reminders_core version={}", reminders_core::core_version());
            match reminders_core::logging_status() {
                Some((level, dir)) => {
                    println!("logging level={level} dir={}", dir.display())
                }
                None => println!("logging=off"),
            }
            ExitCode::SUCCESS
        }
    }
}
