use owo_colors::OwoColorize;
use std::path::Path;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Per-request success line. Users may script against these, so the shape is
/// stable: "✓ Copied <name> -> <dest>".
pub fn print_copy_ok(name: &str, dest: &Path) {
    if is_tty() {
        println!("{} Copied {} -> {}", "✓".green().bold(), name, dest.display());
    } else {
        println!("✓ Copied {} -> {}", name, dest.display());
    }
}

/// Per-request failure line: "✗ Failed to copy <name>: <cause>".
pub fn print_copy_failed(name: &str, cause: &str) {
    if is_tty() {
        println!("{} Failed to copy {}: {}", "✗".red().bold(), name, cause);
    } else {
        println!("✗ Failed to copy {}: {}", name, cause);
    }
}

/// Final aggregate line: "Copied <n> out of <total> files."
pub fn print_summary(succeeded: usize, total: usize) {
    let msg = format!("Copied {} out of {} files.", succeeded, total);
    if succeeded == total {
        if is_tty() {
            println!("{}", msg.green());
        } else {
            println!("{}", msg);
        }
    } else if is_tty() {
        println!("{}", msg.yellow());
    } else {
        println!("{}", msg);
    }
}
