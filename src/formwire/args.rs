use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "formwire")]
#[command(about = "Render and read back the registration form", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding formwire.json (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the registration form document for the sample record
    #[command(alias = "r")]
    Render,

    /// Decode a submission into a fresh record and print it as JSON
    Read {
        /// Posted values as KEY=VALUE
        #[arg(num_args = 0..)]
        pairs: Vec<String>,

        /// Urlencoded submission (e.g. "name=ann&age=18"), read before any pairs
        #[arg(short, long)]
        query: Option<String>,
    },
}
