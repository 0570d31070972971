use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Stats {
        /// The path to the input assembly table.
        #[arg(short, long)]
        assembly: PathBuf,
        /// The path to the output report. Printed to stdout if not set.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    Keymap {
        /// The path to the input assembly table.
        #[arg(short, long)]
        assembly: PathBuf,
        /// The version of the produced keymap.
        #[arg(short = 'v', long)]
        keymap_version: String,
        /// The path to the output keymap.
        #[arg(short, long)]
        output: PathBuf,
    },
    Remap {
        /// The path to the assembly table to take the radical to key index from.
        #[arg(short, long, conflicts_with = "keymap", required_unless_present = "keymap")]
        assembly: Option<PathBuf>,
        /// The path to the keymap file to take the radical to key index from.
        #[arg(short, long)]
        keymap: Option<PathBuf>,
        /// The path to the input corpus of unkeyed character-radical lines.
        #[arg(short, long)]
        corpus: PathBuf,
        /// The path to the output report.
        #[arg(short, long)]
        output: PathBuf,
    },
}
