// src/cli/mod.rs — CLI definition (clap derive)

pub mod list;
pub mod run;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "praktikum",
    about = "Console demonstrations of core Rust constructs",
    version
)]
pub struct Cli {
    /// Demos to run, in order (default: the configured default demo)
    #[arg(trailing_var_arg = true)]
    pub demos: Vec<String>,

    /// Run every demo in curriculum order
    #[arg(long)]
    pub all: bool,

    /// Pick a demo interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available demos
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
