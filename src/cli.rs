use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deployurl::{ExtractStrategy, PrintMode};

/// deployurl - run the deploy CLI and capture the deployment URL
#[derive(Parser, Debug)]
#[command(name = "deployurl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./deployurl.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `-v` count used for logging; `serve` logs at info or above
    pub fn log_verbosity(&self) -> u8 {
        match self.command {
            Commands::Serve { .. } => self.verbose.max(1),
            Commands::Deploy { .. } => self.verbose,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy with the deploy CLI and write `url=<url>` to the output file
    Deploy {
        /// Deploy to production (non-boolean values count as false)
        #[arg(
            long,
            value_name = "BOOL",
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        production: Option<String>,

        /// How to find the URL in the deploy output
        #[arg(long, value_enum)]
        strategy: Option<ExtractStrategy>,

        /// File that receives the `url=` line
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// What to print on success
        #[arg(long, value_enum)]
        print: Option<PrintMode>,

        /// Do not pass the entrypoint as the last argument
        #[arg(long)]
        no_entrypoint_arg: bool,

        /// Extra arguments (kept but ignored)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        rest: Vec<String>,
    },

    /// Serve `{"message":"Hello, World!"}` on every request
    ///
    /// Each request is logged to stderr at info level (method, URI,
    /// version, headers).
    Serve {
        /// Address to listen on (defaults to 0.0.0.0:8000)
        #[arg(long)]
        addr: Option<String>,
    },
}
