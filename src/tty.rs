//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection, user prompting and the interactive confirmation
//! handed to the validator.

use std::io::{self, BufRead, IsTerminal, Write};

use aliasgen::token;

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stdout_tty() -> bool {
    io::stdout().is_terminal()
}

pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && is_stdout_tty()
}

pub fn prompt(message: &str) -> aliasgen::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).map_err(|e| {
        aliasgen::Error::new(
            aliasgen::ErrorCode::InternalIoError,
            format!("Failed to read input: {}", e),
            serde_json::Value::Null,
        )
    })?;

    Ok(line.trim().to_string())
}

/// Ask a yes/no question until the answer is understood.
///
/// End of input or a read failure counts as "no".
pub fn confirm(question: &str) -> bool {
    let stdin = io::stdin();
    loop {
        eprint!("{} (y/n) ", question);
        io::stderr().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }

        match token::parse_yes_no(&line) {
            Some(yes) => return yes,
            None => eprintln!("Invalid input. Enter yes or no."),
        }
    }
}

/// Confirmation used by commands: `--yes` accepts everything, a terminal
/// asks, anything else declines.
pub fn confirmer(assume_yes: bool) -> impl FnMut(&str) -> bool {
    let interactive = require_tty_for_interactive();
    move |question: &str| {
        if assume_yes {
            true
        } else if interactive {
            confirm(question)
        } else {
            status(&format!("{} (declined: not a terminal, pass --yes)", question));
            false
        }
    }
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
