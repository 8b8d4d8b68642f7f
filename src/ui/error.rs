use crossterm::style::Stylize;
use deployurl::DeployError;
use is_terminal::IsTerminal;

use super::ci::{self, AnnotationLevel};

/// Color is used only on an interactive stderr without NO_COLOR
fn supports_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

pub fn format_error(err: &anyhow::Error) -> String {
    format_error_with(err, supports_color())
}

fn format_error_with(err: &anyhow::Error, color: bool) -> String {
    let label = if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };

    let mut out = format!("{} {}\n", label, err);

    match err.downcast_ref::<DeployError>() {
        Some(DeployError::SubprocessFailure { args, stderr, .. }) => {
            out.push_str(&format!("  args: {}\n", args.join(" ")));
            let stderr = stderr.trim_end();
            if stderr.is_empty() {
                out.push_str("  output: (empty)\n");
            } else {
                out.push_str("  output:\n");
                for line in stderr.lines() {
                    out.push_str(&format!("    {}\n", line));
                }
            }
        }
        Some(DeployError::MarkerNotFound { .. }) => {
            out.push_str(
                "  hint: the deploy tool's output format may have changed; \
                 try --strategy tail\n",
            );
        }
        _ => {
            // Errors like `Io` and `Spawn` already embed their source
            let mut shown = err.to_string();
            for cause in err.chain().skip(1) {
                let cause = cause.to_string();
                if !shown.contains(&cause) {
                    out.push_str(&format!("  caused by: {}\n", cause));
                    shown = cause;
                }
            }
        }
    }

    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = super::json::emit(super::json::error_event(err));
        return;
    }

    if ci::is_github_actions() {
        println!(
            "{}",
            ci::annotation(AnnotationLevel::Error, &err.to_string(), None)
        );
    }

    eprint!("{}", format_error(err));
}
