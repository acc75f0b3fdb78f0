//! # CLI Argument Definitions
//!
//! Values are taken as raw strings and validated by the kernel boundary, so the configured
//! unknown-plan and guest-plan policies apply exactly as they would for any other caller.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "evohub")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect Evolution Hub plan entitlements")]
pub struct Cli {
    /// Configuration file (`.toml`, `.json`, `.yaml`); defaults are used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the entitlement record for an owner as JSON
    Resolve(Target),
    /// Check a usage count against the resolved ceiling (exit code 2 when denied)
    Check {
        #[command(flatten)]
        target: Target,
        /// Units already consumed in the current period
        #[arg(long)]
        used: u64,
        /// Units about to be consumed
        #[arg(long, default_value_t = 1)]
        requested: u64,
    },
    /// Print full entitlement tables as JSON
    Table {
        /// Restrict output to one feature
        #[arg(short, long)]
        feature: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct Target {
    /// Product feature (`video`, `voice`, `webscraper`)
    #[arg(short, long)]
    pub feature: String,
    /// Owner classification (`user` or `guest`)
    #[arg(short, long)]
    pub owner: String,
    /// Subscription plan (`free`, `pro`, `premium`, `enterprise`)
    #[arg(short, long)]
    pub plan: Option<String>,
}
