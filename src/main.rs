//! oxsh - Main Entry Point
//!
//! Builds a shell session and runs the interactive read-eval loop. Only a
//! construction failure is fatal; everything after that degrades or is
//! reported inline.

use std::process;

use oxsh::shell::Shell;

#[tokio::main]
async fn main() {
    let mut shell = match Shell::new() {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = shell.run().await {
        eprintln!("Fatal error: {}", e);
        process::exit(1);
    }
}
