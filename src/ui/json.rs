//! NDJSON events for `--json` mode

use std::io::{self, Write};
use std::path::Path;

use deployurl::{DeployError, DeployOutcome};
use serde_json::{json, Value};

/// Emitted once after a successful deploy
pub fn deploy_event(outcome: &DeployOutcome, output_file: &Path, production: bool) -> Value {
    json!({
        "event": "deploy",
        "status": "success",
        "url": outcome.url,
        "line": outcome.output_line(),
        "strategy": outcome.strategy,
        "output_file": output_file.display().to_string(),
        "production": production,
    })
}

/// Emitted instead of the human-readable error block
pub fn error_event(err: &anyhow::Error) -> Value {
    let cause = err
        .downcast_ref::<DeployError>()
        .and_then(DeployError::cause_payload);

    let mut event = json!({
        "event": "error",
        "message": err.to_string(),
    });
    if let Some(cause) = cause {
        event["cause"] = cause;
    }
    event
}

/// Write one event followed by a newline
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}

pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
