use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "guardgen")]
#[command(about = "Generate queue-serializing guard classes for TypeScript APIs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the guard companion for a class in a TypeScript file
    Generate {
        /// Input TypeScript file
        input: PathBuf,

        /// Name of the class whose method surface is wrapped
        #[arg(short, long)]
        class: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the extracted method surface and dispatch strategy per method
    Inspect {
        /// Input TypeScript file
        input: PathBuf,

        /// Name of the class to inspect
        #[arg(short, long)]
        class: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
