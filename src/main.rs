//! deployurl CLI
//!
//! Usage: deployurl <COMMAND>
//!
//! Commands:
//!   deploy  Run the deploy CLI and write `url=<url>` to the output file
//!   serve   Answer every HTTP request with a hello-world JSON body

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use commands::deploy::{cmd_deploy, DeployArgs};
use commands::serve::cmd_serve;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = deployurl::logging::init(cli.log_verbosity(), json) {
        eprintln!("[WARN] logging disabled: {}", e);
    }

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Deploy {
            production,
            strategy,
            output,
            print,
            no_entrypoint_arg,
            rest,
        } => cmd_deploy(
            DeployArgs {
                production,
                strategy,
                output,
                print,
                no_entrypoint_arg,
                rest,
            },
            config_path,
            cli.json,
        ),
        Commands::Serve { addr } => cmd_serve(addr, config_path, cli.json),
    }
}
