//! Logging setup
//!
//! Logs go to stderr so stdout stays clean for the deploy output and the
//! `url=` line. `RUST_LOG` overrides the level picked from `-v`.

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map the `-v` count to a level: warn, info, debug, trace
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `json` switches to structured output.
pub fn init(verbose: u8, json: bool) -> anyhow::Result<()> {
    let level = level_for_verbosity(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,deployurl={}", level))
    });

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none())
        .with_target(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()?;
    }

    Ok(())
}
