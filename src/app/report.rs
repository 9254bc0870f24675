//! Top-level failure boundary.

use std::error::Error;
use std::io::Write;

const FAILURE_PREFIX: &str = "The operation failed. ";

/// First non-empty message along an error's causal chain.
///
/// Walks the error itself, then its source, then the source's source, and so on.
/// Returns `None` when every message in the chain is empty.
pub fn root_cause_message(error: &(dyn Error + 'static)) -> Option<String> {
    let mut current = Some(error);
    while let Some(err) = current {
        let message = err.to_string();
        if !message.is_empty() {
            return Some(message);
        }
        current = err.source();
    }
    None
}

/// Single user-facing line describing a failed operation.
pub fn failure_line(error: &(dyn Error + 'static)) -> String {
    match root_cause_message(error) {
        Some(message) => format!("{}Message: {}", FAILURE_PREFIX, message),
        None => FAILURE_PREFIX.to_string(),
    }
}

/// Log the full error, print its failure line to `out`, and return the exit status.
pub fn report(error: &(dyn Error + 'static), out: &mut dyn Write) -> i32 {
    tracing::error!(error = %error, chain = ?error_chain(error), "operation failed");
    // Nothing sensible remains if stdout itself is gone.
    let _ = writeln!(out, "{}", failure_line(error));
    1
}

/// Report `error` on stdout and terminate the process with status 1.
pub fn report_and_exit(error: &(dyn Error + 'static)) -> ! {
    let status = report(error, &mut std::io::stdout());
    std::process::exit(status);
}

fn error_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = error.source();
    while let Some(err) = current {
        chain.push(err.to_string());
        current = err.source();
    }
    chain
}
