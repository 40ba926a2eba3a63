//! gull_chess interactive loop

use gull_chess::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("gull_chess");
    println!("Commands: add, rm, ls, move, eval, show, quit");
    ExitCode::from(Cli::new().run())
}
