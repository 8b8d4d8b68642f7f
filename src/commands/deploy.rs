//! `deployurl deploy`

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use deployurl::{
    deploy, write_output_file, DeployOptions, DeployOutcome, ExtractStrategy, PrintMode,
    SystemRunner,
};

use crate::ui::json;

/// Flags collected from the `deploy` subcommand
#[derive(Debug, Default)]
pub struct DeployArgs {
    pub production: Option<String>,
    pub strategy: Option<ExtractStrategy>,
    pub output: Option<PathBuf>,
    pub print: Option<PrintMode>,
    pub no_entrypoint_arg: bool,
    pub rest: Vec<String>,
}

impl DeployArgs {
    /// Pick known flags back out of `rest`.
    ///
    /// clap stops matching flags at the first unrecognized argument, so
    /// `deploy --foo --strategy tail` leaves `--strategy tail` in `rest`.
    /// Later occurrences win. `--production` is left for
    /// [`DeployOptions::resolve`].
    pub fn absorb_rest(mut self) -> Result<Self> {
        let mut rest = Vec::with_capacity(self.rest.len());
        let mut args = std::mem::take(&mut self.rest).into_iter();

        while let Some(arg) = args.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) if name.starts_with("--") => {
                    (name.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            match name.as_str() {
                "--strategy" => {
                    let value = flag_value(&name, inline, &mut args)?;
                    self.strategy = Some(parse_enum(&name, &value)?);
                }
                "--print" => {
                    let value = flag_value(&name, inline, &mut args)?;
                    self.print = Some(parse_enum(&name, &value)?);
                }
                "--output" | "-o" => {
                    self.output = Some(PathBuf::from(flag_value(&name, inline, &mut args)?));
                }
                "--no-entrypoint-arg" if inline.is_none() => self.no_entrypoint_arg = true,
                _ => rest.push(arg),
            }
        }

        self.rest = rest;
        Ok(self)
    }
}

fn flag_value(
    name: &str,
    inline: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String> {
    inline
        .or_else(|| args.next())
        .ok_or_else(|| anyhow!("a value is required for '{}'", name))
}

fn parse_enum<T: ValueEnum>(name: &str, value: &str) -> Result<T> {
    match T::from_str(value, true) {
        Ok(parsed) => Ok(parsed),
        Err(message) => bail!("invalid value '{}' for '{}': {}", value, name, message),
    }
}

pub fn cmd_deploy(args: DeployArgs, config_path: Option<&Path>, json: bool) -> Result<()> {
    let args = args.absorb_rest()?;
    let mut config = super::load_config(config_path, json)?;

    // CLI flags win over file and env
    if let Some(strategy) = args.strategy {
        config.output.strategy = strategy;
    }
    if let Some(output) = args.output {
        config.output.file = output;
    }
    if let Some(print) = args.print {
        config.output.print = print;
    }
    if args.no_entrypoint_arg {
        config.deploy.append_entrypoint = false;
    }

    let options = DeployOptions::resolve(args.production.as_deref(), args.rest);
    tracing::info!(
        project = %config.deploy.project,
        production = options.production,
        "deploying"
    );

    let outcome = deploy(
        &SystemRunner,
        &config.deploy,
        &options,
        config.output.strategy,
    )?;

    // The deploy already happened; show it even if the file write fails
    if json {
        json::emit(json::deploy_event(
            &outcome,
            &config.output.file,
            options.production,
        ))?;
    } else {
        println!("{}", render(&outcome, config.output.print));
    }

    write_output_file(&config.output.file, &outcome.output_line())?;

    Ok(())
}

fn render(outcome: &DeployOutcome, print: PrintMode) -> String {
    match print {
        PrintMode::Raw => outcome.output.clone(),
        PrintMode::Url => outcome.output_line(),
    }
}
