//! Terminal message helpers shared by all CLI handlers.

use std::fmt;
use std::io::{self, Write};

use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW};

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️ {RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️ {RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Low-key note, used for advisory outcomes (e.g. a save kept local
/// because the remote push did not go through).
pub fn note<T: fmt::Display>(msg: T) {
    println!("{GREY}· {msg}{RESET}");
}

/// Section header for reports and summaries.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}====================== {msg}{RESET}");
}

/// Ask a yes/no confirmation from the user. Defaults to "no".
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_ok() {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
